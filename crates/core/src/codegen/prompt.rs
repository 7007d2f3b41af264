use super::select::DEFAULT_REQUIRED_FILES;
use super::types::GenerationRequest;

/// Persona for the agent that writes the project.
pub const DEVELOPER_PREAMBLE: &str = "\
You are a senior React developer who produces complete, working React applications.
You answer with a single JSON object that maps every project file path to that file's full content.
Implement every feature the user asks for, organised as a real project.

Base structure (extend it as the requirements demand):
{
    \"package.json\": \"dependencies and scripts\",
    \"tsconfig.json\": \"TypeScript configuration\",
    \"vite.config.ts\": \"Vite configuration\",
    \"index.html\": \"HTML entry\",
    \"src/main.tsx\": \"application bootstrap\",
    \"src/App.tsx\": \"root component\"
}

Where things go:
- src/pages/: routed page components, wrapped in error boundaries
- src/components/: only the components the requirements need, grouped by feature or shared use, with typed props
- src/styles/: the minimum set of style files, responsive and consistent
- src/hooks/: custom hooks for forms or data fetching when needed
- src/utils/: validation helpers and type guards when needed
- src/types/: TypeScript interfaces for the domain
- src/services/: API clients and their error handling when needed
- src/context/: context providers only when shared state is required

Engineering rules:
- TypeScript in strict mode
- Idiomatic function components and hooks
- Explicit error and loading states
- Responsive styling
- Production quality code

Output the JSON object and nothing else. No prose, no explanations.";

/// Persona for the agent that polishes the developer's draft.
pub const DESIGNER_PREAMBLE: &str = "\
You are a senior UI/UX designer who also writes React and TypeScript.
You receive a JSON object mapping file paths to file contents for a React application.
Improve its visual design and usability without breaking behaviour:
- consistent spacing, typography and colour palette
- responsive layouts for mobile and desktop
- accessible markup: labels, roles, focus states and contrast
- clear loading, empty and error states
- subtle transitions where they help comprehension

Keep every existing file path. You may add new style or component files.
Return the complete project in the same shape: a single JSON object mapping every file path to its full content.
Output the JSON object and nothing else. No prose, no explanations.";

/// Build the instruction sent to the developer agent.
pub fn developer_message(request: &GenerationRequest) -> String {
    let base_files = DEFAULT_REQUIRED_FILES
        .iter()
        .map(|path| format!("- {path}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\
Create a complete React application that implements: {description}

Respond with ONLY a JSON object containing every file of the project.

Base files:
{base_files}

Then add whatever the requirements need under src/pages/, src/components/,
src/styles/, src/hooks/, src/utils/, src/types/, src/services/ and src/context/.

Every component must have TypeScript interfaces, styling, error handling,
loading states where relevant, and comments.

Format:
{{
    \"package.json\": \"content\",
    \"path/to/file.tsx\": \"content\"
}}

No additional text.",
        description = request.description(),
    )
}

/// Build the instruction sent to the designer agent.
///
/// The developer's reply is embedded verbatim, fences and all.
pub fn designer_message(draft: &str) -> String {
    format!(
        "\
Enhance the design of this React application.

{draft}

Return ONLY the enhanced JSON object mapping each file path to its complete content."
    )
}
