use std::fmt;
use std::path::Path;

use crate::cli::Options;
use crate::error::LoadError;
use crate::loader::load_lines;

/// One discrepancy between the two normalized line sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffEntry {
    Mismatch {
        line: usize, // 1-based
        left: String,
        right: String,
    },
    ExtraInFirst {
        line: String,
    },
    ExtraInSecond {
        line: String,
    },
}

impl fmt::Display for DiffEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffEntry::Mismatch { line, left, right } => {
                write!(f, "Line {line}: {left} != {right}")
            }
            DiffEntry::ExtraInFirst { line } => write!(f, "Extra line in file1: {line}"),
            DiffEntry::ExtraInSecond { line } => write!(f, "Extra line in file2: {line}"),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub equal: bool,
    pub diffs: Vec<DiffEntry>,
}

/// Positional comparison of two normalized sequences: lines are aligned
/// strictly by index, then whichever sequence is longer contributes its
/// tail as extra lines. Not an edit-distance diff.
pub fn compare_lines(lines1: &[String], lines2: &[String]) -> Comparison {
    let mut diffs = Vec::new();

    for (i, (left, right)) in lines1.iter().zip(lines2.iter()).enumerate() {
        if left != right {
            diffs.push(DiffEntry::Mismatch {
                line: i + 1,
                left: left.clone(),
                right: right.clone(),
            });
        }
    }

    let shared = lines1.len().min(lines2.len());
    for line in &lines1[shared..] {
        diffs.push(DiffEntry::ExtraInFirst { line: line.clone() });
    }
    for line in &lines2[shared..] {
        diffs.push(DiffEntry::ExtraInSecond { line: line.clone() });
    }

    Comparison {
        equal: diffs.is_empty(),
        diffs,
    }
}

/// Loads both files and compares them. The first load failure is terminal:
/// `file2` is not read when `file1` fails.
pub fn compare_files(file1: &Path, file2: &Path, opts: &Options) -> Result<Comparison, LoadError> {
    let lines1 = load_lines(file1, opts)?;
    let lines2 = load_lines(file2, opts)?;
    Ok(compare_lines(&lines1, &lines2))
}
