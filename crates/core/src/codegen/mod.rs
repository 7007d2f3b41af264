pub mod event;
pub mod extract;
pub mod prompt;
pub mod select;
pub mod transcript;
pub mod types;

pub use event::{
    drain_blocks, parse_frame, FilePayload, Frame, FrameReader, SseEvent, STATUS_FILE,
};
pub use extract::{extract_files, strip_fences, ExtractionError};
pub use prompt::{designer_message, developer_message, DESIGNER_PREAMBLE, DEVELOPER_PREAMBLE};
pub use select::{select_files, FileSelection, DEFAULT_REQUIRED_FILES};
pub use transcript::{last_reply, ChatTurn, Role};
pub use types::{AgentResponse, FileMap, GenerationRequest, Pipeline, RequestError};
