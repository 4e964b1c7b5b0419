//! Plaintext pattern loading and anchored placement
//!
//! The input format follows the conwaylife.com plaintext convention: lines
//! beginning with `!` are comments, blank lines are skipped, `O` marks a
//! live cell. Parsing is lenient: any other character, `.` included, is a
//! dead cell.

use std::path::Path;
use std::str::FromStr;

use crate::core::error::{LifeError, Result};

/// Character that marks a live cell
pub const LIVE_MARKER: char = 'O';
/// Lines starting with this character are ignored
pub const COMMENT_MARKER: char = '!';

/// A rectangular boolean pattern parsed from plaintext
///
/// Rows may be ragged in the input; the pattern width is the longest row
/// and missing trailing cells read as dead.
#[derive(Debug, Clone)]
pub struct Pattern {
    rows: Vec<Vec<bool>>,
    width: usize,
}

impl Pattern {
    /// Parses plaintext into a pattern
    ///
    /// Fails with `EmptyPattern` when no pattern rows remain after
    /// stripping comments and blank lines.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }
            rows.push(line.chars().map(|c| c == LIVE_MARKER).collect::<Vec<_>>());
        }
        if rows.is_empty() {
            return Err(LifeError::EmptyPattern);
        }
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        Ok(Self { rows, width })
    }

    /// Reads and parses a pattern file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let pattern = Self::parse(&text)?;
        tracing::debug!(
            path = %path.display(),
            width = pattern.width(),
            height = pattern.height(),
            live = pattern.live_cell_count(),
            "loaded pattern"
        );
        Ok(pattern)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cell state at (x, y); ragged or out-of-range positions read as dead
    pub fn is_live(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    pub fn live_cell_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c)
            .count()
    }
}

/// Horizontal placement of a pattern within the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Horizontal {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical placement of a pattern within the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Vertical {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Where a pattern is placed within a larger world
///
/// Parsed from two-letter codes like `cc` or `lt`: first letter horizontal
/// (l/c/r), second vertical (t/c/b).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    pub horizontal: Horizontal,
    pub vertical: Vertical,
}

impl Anchor {
    /// Top-left offset of a `pattern`-sized rectangle inside `world`
    ///
    /// Edge anchors leave the mandatory 1-cell border; the caller must
    /// already have validated that the pattern fits.
    pub fn offsets(self, world: (usize, usize), pattern: (usize, usize)) -> (usize, usize) {
        let (w, h) = world;
        let (pw, ph) = pattern;
        let x = match self.horizontal {
            Horizontal::Left => 1,
            Horizontal::Center => (w - pw) / 2,
            Horizontal::Right => w - pw - 2,
        };
        let y = match self.vertical {
            Vertical::Top => 1,
            Vertical::Center => (h - ph) / 2,
            Vertical::Bottom => h - ph - 2,
        };
        (x, y)
    }
}

impl FromStr for Anchor {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || format!("invalid anchor '{s}': expected a letter from l/c/r followed by one from t/c/b, e.g. cc");
        let mut chars = s.chars();
        let (Some(h), Some(v), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let horizontal = match h {
            'l' => Horizontal::Left,
            'c' => Horizontal::Center,
            'r' => Horizontal::Right,
            _ => return Err(invalid()),
        };
        let vertical = match v {
            't' => Vertical::Top,
            'c' => Vertical::Center,
            'b' => Vertical::Bottom,
            _ => return Err(invalid()),
        };
        Ok(Self {
            horizontal,
            vertical,
        })
    }
}
