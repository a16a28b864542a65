// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Formatting of chord-annotated lyric lines.
//!
//! A lyric line may carry inline chord annotations of the form
//! `Tom[C]ando no viol[G]ão`: a bracketed chord name applies at the text
//! position immediately following the already-scanned text. [`format_line`]
//! splits such a line into a chord row and a plain lyric row, suitable for
//! stacked monospaced rendering.

/// Non-breaking space, the placeholder glyph for blank lines and filler.
pub const NBSP: char = '\u{a0}';

/// One run of the rendered chord row.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Fragment {
    /// A chord name starting at this column.
    Chord { name: String, known: bool },
    /// A run of blank columns.
    Filler(usize),
}

/// A single annotated line split into a chord row and a lyric row.
///
/// Positions are counted in `char`s so that accented lyrics keep their
/// columns when rendered in a monospaced font.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormattedLine {
    pub chord_row: Vec<Fragment>,
    pub lyric_row: String,
}

impl FormattedLine {
    /// Returns whether the line carries any chord annotations.
    pub fn has_chords(&self) -> bool {
        self.chord_row
            .iter()
            .any(|fragment| matches!(fragment, Fragment::Chord { .. }))
    }

    /// Renders the chord row as plain text, each name starting at its column.
    pub fn chord_row_text(&self) -> String {
        let mut text = String::new();
        for fragment in &self.chord_row {
            match fragment {
                Fragment::Chord { name, .. } => text.push_str(name),
                Fragment::Filler(width) => {
                    for _ in 0..*width {
                        text.push(' ');
                    }
                }
            }
        }
        text
    }
}

/// A chord annotation recorded while scanning a line.
#[derive(Clone, Debug, Eq, PartialEq)]
struct Annotation {
    /// Char position in the lyric row at which the chord applies.
    position: usize,
    name: String,
}

/// Formats one annotated line into a chord row and a lyric row.
///
/// `is_known` reports whether a chord name exists in the caller's chord
/// library (matched however the caller likes, typically case-insensitively);
/// it only sets the presentational `known` flag on the emitted fragments.
///
/// Unterminated or empty brackets are literal text. Chords take no width in
/// the lyric row. Where two chord names would overlap in the chord row the
/// later one wins; there is no collision shifting. A blank line becomes an
/// empty chord row over a single placeholder, preserving vertical spacing.
pub fn format_line(line: &str, is_known: impl Fn(&str) -> bool) -> FormattedLine {
    if line.trim().is_empty() {
        return FormattedLine {
            chord_row: Vec::new(),
            lyric_row: NBSP.to_string(),
        };
    }

    let (annotations, lyric_row) = scan_line(line);
    if annotations.is_empty() {
        return FormattedLine {
            chord_row: Vec::new(),
            lyric_row,
        };
    }

    // The chord row spans the lyric row or the furthest chord end, whichever
    // is wider.
    let width = annotations
        .iter()
        .map(|annotation| annotation.position + annotation.name.chars().count())
        .chain([lyric_row.chars().count()])
        .max()
        .unwrap_or_default();

    #[derive(Clone, Copy)]
    enum Column {
        Blank,
        Start(usize),
        Covered,
    }

    let mut columns = vec![Column::Blank; width];
    for (index, annotation) in annotations.iter().enumerate() {
        columns[annotation.position] = Column::Start(index);
        let name_len = annotation.name.chars().count();
        for column in columns
            .iter_mut()
            .skip(annotation.position + 1)
            .take(name_len - 1)
        {
            *column = Column::Covered;
        }
    }

    let mut chord_row = Vec::new();
    let mut blanks = 0;
    for column in &columns {
        match column {
            Column::Blank => blanks += 1,
            Column::Covered => {}
            Column::Start(index) => {
                if blanks > 0 {
                    chord_row.push(Fragment::Filler(blanks));
                    blanks = 0;
                }
                let name = &annotations[*index].name;
                chord_row.push(Fragment::Chord {
                    name: name.clone(),
                    known: is_known(name),
                });
            }
        }
    }
    if blanks > 0 {
        chord_row.push(Fragment::Filler(blanks));
    }

    FormattedLine {
        chord_row,
        lyric_row,
    }
}

/// Formats every line of a multi-line annotated text.
pub fn format_sheet(text: &str, is_known: impl Fn(&str) -> bool) -> Vec<FormattedLine> {
    text.lines()
        .map(|line| format_line(line, &is_known))
        .collect()
}

/// Scans a line into its chord annotations and the plain lyric text.
fn scan_line(line: &str) -> (Vec<Annotation>, String) {
    let mut annotations = Vec::new();
    let mut lyric = String::new();
    let mut position = 0;
    let mut rest = line;
    loop {
        let Some(open) = rest.find('[') else {
            break;
        };
        let (before, bracketed) = rest.split_at(open);
        match bracketed.find(']') {
            // A bracket pair must enclose at least one character to be an
            // annotation; `[]` is literal text.
            Some(close) if close > 1 => {
                lyric.push_str(before);
                position += before.chars().count();
                annotations.push(Annotation {
                    position,
                    name: bracketed[1..close].to_string(),
                });
                rest = &bracketed[close + 1..];
            }
            Some(_) => {
                lyric.push_str(before);
                lyric.push('[');
                position += before.chars().count() + 1;
                rest = &bracketed[1..];
            }
            // Unterminated bracket: the remainder is literal text.
            None => break,
        }
    }
    lyric.push_str(rest);

    if lyric.is_empty() {
        // A line holding only annotations still gets a lyric row to keep the
        // chord row from collapsing onto the next line.
        lyric.push(' ');
    }
    (annotations, lyric)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn none_known(_name: &str) -> bool {
        false
    }

    #[test]
    fn plain_line_passes_through() {
        let line = format_line("Hello world", none_known);
        assert_eq!(line.lyric_row, "Hello world");
        assert_eq!(line.chord_row, vec![]);
        assert!(!line.has_chords());
    }

    #[test]
    fn blank_lines_become_placeholders() {
        for input in ["", "   ", "\t"] {
            let line = format_line(input, none_known);
            assert_eq!(line.chord_row, vec![]);
            assert_eq!(line.lyric_row, NBSP.to_string());
        }
    }

    #[test]
    fn chords_are_positioned_over_the_lyrics() {
        let line = format_line("Tom[C]ando no viol[G]ão", none_known);
        assert_eq!(line.lyric_row, "Tomando no violão");
        assert_eq!(
            line.chord_row,
            vec![
                Fragment::Filler(3),
                Fragment::Chord {
                    name: "C".to_string(),
                    known: false
                },
                Fragment::Filler(11),
                Fragment::Chord {
                    name: "G".to_string(),
                    known: false
                },
                Fragment::Filler(1),
            ]
        );
        assert_eq!(line.chord_row_text(), "   C           G ");
    }

    #[test]
    fn chord_names_may_hold_digits_and_symbols() {
        let line = format_line("[C#m7/G]la", none_known);
        assert_eq!(line.lyric_row, "la");
        assert_eq!(
            line.chord_row,
            vec![Fragment::Chord {
                name: "C#m7/G".to_string(),
                known: false
            }]
        );
    }

    #[test]
    fn unterminated_bracket_is_literal() {
        let line = format_line("Tom[Cando", none_known);
        assert_eq!(line.lyric_row, "Tom[Cando");
        assert_eq!(line.chord_row, vec![]);
    }

    #[test]
    fn empty_bracket_pair_is_literal() {
        let line = format_line("a[]b", none_known);
        assert_eq!(line.lyric_row, "a[]b");
        assert_eq!(line.chord_row, vec![]);
    }

    #[test]
    fn later_chord_wins_on_same_position() {
        let line = format_line("[Cmaj7][G]x", none_known);
        assert_eq!(line.lyric_row, "x");
        assert_eq!(
            line.chord_row,
            vec![Fragment::Chord {
                name: "G".to_string(),
                known: false
            }]
        );
    }

    #[test]
    fn partial_overlap_keeps_both_starts() {
        // G lands on a column covered by Cmaj7; both names stay, the covered
        // columns between them are simply dropped.
        let line = format_line("[Cmaj7]ab[G]cd", none_known);
        assert_eq!(line.lyric_row, "abcd");
        assert_eq!(
            line.chord_row,
            vec![
                Fragment::Chord {
                    name: "Cmaj7".to_string(),
                    known: false
                },
                Fragment::Chord {
                    name: "G".to_string(),
                    known: false
                },
            ]
        );
    }

    #[test]
    fn chord_only_line_keeps_a_lyric_placeholder() {
        let line = format_line("[Am]", none_known);
        assert_eq!(line.lyric_row, " ");
        assert!(line.has_chords());
    }

    #[test]
    fn known_flag_matches_the_library() {
        let line = format_line("So[Am]me [X9]thing", |name| {
            name.eq_ignore_ascii_case("am")
        });
        let known: Vec<_> = line
            .chord_row
            .iter()
            .filter_map(|fragment| match fragment {
                Fragment::Chord { name, known } => Some((name.as_str(), *known)),
                Fragment::Filler(_) => None,
            })
            .collect();
        assert_eq!(known, vec![("Am", true), ("X9", false)]);
    }

    #[test]
    fn lyric_row_reconstructs_the_unbracketed_text() {
        let input = "Tom[C]ando no viol[G]ão";
        let line = format_line(input, none_known);
        let stripped: String = input
            .replace("[C]", "")
            .replace("[G]", "");
        assert_eq!(line.lyric_row, stripped);
    }

    #[test]
    fn sheets_format_line_by_line() {
        let sheet = format_sheet("One[C]\n\nTwo", none_known);
        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet[0].lyric_row, "One");
        assert!(sheet[0].has_chords());
        assert_eq!(sheet[1].lyric_row, NBSP.to_string());
        assert_eq!(sheet[2].lyric_row, "Two");
        assert!(!sheet[2].has_chords());
    }
}
