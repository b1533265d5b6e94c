use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template must configure exactly one 'first' archetype, found {0}")]
    FirstArchetypeCount(usize),

    #[error("template configures {0} 'repeat' archetypes, at most one is allowed")]
    TooManyRepeatArchetypes(usize),

    #[error("template configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
