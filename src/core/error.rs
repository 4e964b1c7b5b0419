use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeError {
    #[error("pattern ({pattern_width}x{pattern_height}) does not fit in a {world_width}x{world_height} world with a 1-cell border")]
    PatternTooLarge {
        pattern_width: usize,
        pattern_height: usize,
        world_width: usize,
        world_height: usize,
    },

    #[error("pattern contains no rows")]
    EmptyPattern,

    #[error("world dimensions must both be greater than 5, got {width}x{height}")]
    InvalidWorldSize { width: usize, height: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
