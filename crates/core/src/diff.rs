//! Line-level diff between two versions of file content
//!
//! Classic longest-common-subsequence over lines, rendered as maximal runs
//! of added, removed, and unchanged text. Line terminators stay attached to
//! their lines, so concatenating the `unchanged` + `removed` chunks
//! reproduces the old content byte for byte, and `unchanged` + `added`
//! reproduces the new content.

/// Classification of a run of lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffKind {
    Added,
    Removed,
    Unchanged,
}

/// A contiguous run of same-kind lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffChunk {
    pub kind: DiffKind,
    pub text: String,
}

/// Compute a line-level diff from `old` to `new`
///
/// Both inputs are required; a file that did not exist in the parent commit
/// is the caller's case to report ("new file"), not a diff.
pub fn diff(old: &str, new: &str) -> Vec<DiffChunk> {
    let old_lines: Vec<&str> = old.split_inclusive('\n').collect();
    let new_lines: Vec<&str> = new.split_inclusive('\n').collect();

    let ops = edit_script(&old_lines, &new_lines);
    group_chunks(&ops)
}

#[derive(Debug, Clone, Copy)]
enum Op<'a> {
    Add(&'a str),
    Remove(&'a str),
    Keep(&'a str),
}

/// LCS edit script via the standard dynamic-programming table
fn edit_script<'a>(old: &[&'a str], new: &[&'a str]) -> Vec<Op<'a>> {
    let n = old.len();
    let m = new.len();

    // lcs[i][j] = LCS length of old[i..] and new[j..]
    let mut lcs = vec![vec![0u32; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if old[i] == new[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut ops = Vec::with_capacity(n + m);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if old[i] == new[j] {
            ops.push(Op::Keep(old[i]));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            ops.push(Op::Remove(old[i]));
            i += 1;
        } else {
            ops.push(Op::Add(new[j]));
            j += 1;
        }
    }
    while i < n {
        ops.push(Op::Remove(old[i]));
        i += 1;
    }
    while j < m {
        ops.push(Op::Add(new[j]));
        j += 1;
    }

    ops
}

/// Merge consecutive same-kind ops into chunks
fn group_chunks(ops: &[Op]) -> Vec<DiffChunk> {
    let mut chunks: Vec<DiffChunk> = Vec::new();

    for op in ops {
        let (kind, line) = match op {
            Op::Add(line) => (DiffKind::Added, *line),
            Op::Remove(line) => (DiffKind::Removed, *line),
            Op::Keep(line) => (DiffKind::Unchanged, *line),
        };

        match chunks.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(line),
            _ => chunks.push(DiffChunk {
                kind,
                text: line.to_string(),
            }),
        }
    }

    chunks
}
