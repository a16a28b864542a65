// Copyright 2026 The chordweb Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Pure formatting and encoding routines for a personal guitar repertoire:
//! the song and chord data model with its JSON backup format ([`types`]),
//! the chord-over-lyric line formatter ([`sheet`]), the visual chord-diagram
//! codec ([`diagram`]) and streaming-link embedding ([`embed`]).
//!
//! Everything in this crate is a plain computation over in-memory values;
//! storage and rendering are the caller's concern. E.g.:
//!
//! ```
//! use chordsheet::sheet::format_line;
//!
//! let line = format_line("Tom[C]ando no viol[G]ão", |_| false);
//! assert_eq!(line.lyric_row, "Tomando no violão");
//! assert_eq!(line.chord_row_text().trim_end(), "   C           G");
//! ```

pub mod diagram;
pub mod embed;
pub mod sheet;
pub mod types;
