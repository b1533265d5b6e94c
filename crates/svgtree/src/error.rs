use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvgTreeError {
    #[error("SVG parsing error: {0}")]
    Parse(#[from] roxmltree::Error),
}
