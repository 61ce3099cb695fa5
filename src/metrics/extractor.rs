//! Best-effort recovery of a macro split from model-written prose.
//!
//! The upstream model gives no schema guarantee, so this is plain pattern
//! scraping: for each category, the first occurrence of its name followed
//! later on the same line by a 1-3 digit number and a `%` sign. Anything
//! that does not match counts as 0, and a narrative with no matches at all
//! falls back to [`MacroBreakdown::DEFAULT`].

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::metrics::constants::{CARBS_NAMES, FAT_NAMES, PROTEIN_NAMES};
use crate::models::{MacroBreakdown, MacroExtraction, MacroKind};

fn macro_pattern(names: &str) -> Option<Regex> {
    // `.` stops at newlines; at most one whitespace char before `%`.
    Regex::new(&format!(r"(?i)(?:{names}).*?([0-9]{{1,3}})\s?%")).ok()
}

static CARBS_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| macro_pattern(CARBS_NAMES));
static PROTEIN_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| macro_pattern(PROTEIN_NAMES));
static FAT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| macro_pattern(FAT_NAMES));

fn pattern_for(kind: MacroKind) -> Option<&'static Regex> {
    match kind {
        MacroKind::Carbs => CARBS_PATTERN.as_ref(),
        MacroKind::Protein => PROTEIN_PATTERN.as_ref(),
        MacroKind::Fat => FAT_PATTERN.as_ref(),
    }
}

/// First percentage associated with `kind` in the narrative, if any.
pub fn find_macro(narrative: &str, kind: MacroKind) -> Option<u32> {
    pattern_for(kind)?
        .captures(narrative)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Extract a carbs/protein/fat split from a narrative.
///
/// Never fails. Categories are matched independently; missing ones are 0.
/// Values are returned as found (no clamping, no normalization) unless all
/// three are 0, in which case the default split is returned.
pub fn extract_macros(narrative: &str) -> MacroBreakdown {
    extract_macros_with_source(narrative).macros
}

/// Like [`extract_macros`], but also reports whether the default was used.
///
/// A narrative that literally states 50/30/20 is not a fallback.
pub fn extract_macros_with_source(narrative: &str) -> MacroExtraction {
    let [carbs, protein, fat] = MacroKind::ALL.map(|kind| {
        let value = find_macro(narrative, kind);
        debug!(?kind, ?value, "macro lookup");
        value.unwrap_or(0)
    });

    let found = MacroBreakdown::new(carbs, protein, fat);
    if found.sum() > 0 {
        MacroExtraction {
            macros: found,
            fell_back: false,
        }
    } else {
        info!(
            len = narrative.len(),
            "no macro percentages found, using default split"
        );
        MacroExtraction {
            macros: MacroBreakdown::DEFAULT,
            fell_back: true,
        }
    }
}
