use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid segment {chromosome}:{start}-{end}: start is greater than end")]
    InvalidSegmentBounds {
        chromosome: String,
        start: u64,
        end: u64,
    },
}
