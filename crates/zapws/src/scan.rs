use std::io::{self, BufRead};

const MARKER: char = '*';

/// Lazily yields every line that ends in whitespace, with the trailing run
/// replaced by [`MARKER`]s. Line numbers are 1-based; clean and empty lines
/// produce nothing.
pub fn scan<R>(reader: R) -> impl Iterator<Item = io::Result<(usize, String)>>
where
    R: BufRead,
{
    reader
        .lines()
        .enumerate()
        .filter_map(|(at, line)| match line {
            Ok(line) => render(&line).map(|rendered| Ok((at + 1, rendered))),
            Err(err) => Some(Err(err)),
        })
}

fn render(line: &str) -> Option<String> {
    let mut chars = line.chars().collect::<Vec<_>>();

    match chars.last() {
        Some(last) if last.is_whitespace() => {}
        _ => return None,
    }

    for c in chars.iter_mut().rev() {
        if !c.is_whitespace() {
            break;
        }
        *c = MARKER;
    }

    Some(chars.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    fn collect(input: &str) -> Vec<(usize, String)> {
        scan(Cursor::new(input)).map(|line| line.unwrap()).collect()
    }

    #[test]
    fn marks_trailing_whitespace() {
        assert_eq!(collect("abc  \n"), vec![(1, "abc**".to_string())]);
    }

    #[test]
    fn skips_clean_lines() {
        assert!(collect("abc\n").is_empty());
        assert!(collect("").is_empty());
    }

    #[test]
    fn replaces_whitespace_only_lines() {
        assert_eq!(collect("   \n"), vec![(1, "***".to_string())]);
    }

    #[test]
    fn skips_empty_lines() {
        assert_eq!(collect("\n\ntrailing \n"), vec![(3, "trailing*".to_string())]);
    }

    #[test]
    fn marks_tabs_and_spaces() {
        assert_eq!(collect("mixed \t \n"), vec![(1, "mixed***".to_string())]);
    }

    #[test]
    fn leaves_interior_whitespace_alone() {
        assert_eq!(collect("a b  \n"), vec![(1, "a b**".to_string())]);
    }

    #[test]
    fn numbers_only_flagged_lines() {
        let flagged = collect("one\ntwo \nthree\nfour\t\n");
        assert_eq!(
            flagged,
            vec![(2, "two*".to_string()), (4, "four*".to_string())]
        );
    }

    #[test]
    fn rescanning_a_file_is_idempotent() {
        use std::io::{BufReader, Write};

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "left alone\npadded   \n\t\t\n").unwrap();

        let run = || -> Vec<(usize, String)> {
            let file = std::fs::File::open(file.path()).unwrap();
            scan(BufReader::new(file)).map(|line| line.unwrap()).collect()
        };

        let first = run();
        let second = run();

        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![(2, "padded***".to_string()), (3, "**".to_string())]
        );
    }
}
