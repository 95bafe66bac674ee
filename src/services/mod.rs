// linkdeck services
// Injectable capabilities: metadata lookup and user confirmation prompts.

pub mod metadata_service;
pub mod prompt_service;
