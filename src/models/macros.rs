use std::fmt;

use serde::Serialize;

use crate::metrics::constants::{DEFAULT_CARBS_PCT, DEFAULT_FAT_PCT, DEFAULT_PROTEIN_PCT};

/// One of the three macro-nutrient categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroKind {
    Carbs,
    Protein,
    Fat,
}

impl MacroKind {
    pub const ALL: [MacroKind; 3] = [MacroKind::Carbs, MacroKind::Protein, MacroKind::Fat];

    /// Chart label, as shown next to each slice.
    pub fn label(&self) -> &'static str {
        match self {
            MacroKind::Carbs => "Carbohidratos",
            MacroKind::Protein => "Proteínas",
            MacroKind::Fat => "Grasas",
        }
    }
}

/// Percentage split of dietary energy among carbs, protein and fat.
///
/// Values are taken as found in the source text: they are not clamped to
/// 0..=100 and need not sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroBreakdown {
    pub carbs_pct: u32,
    pub protein_pct: u32,
    pub fat_pct: u32,
}

impl MacroBreakdown {
    /// Split used when nothing could be recovered from a narrative.
    pub const DEFAULT: MacroBreakdown = MacroBreakdown {
        carbs_pct: DEFAULT_CARBS_PCT,
        protein_pct: DEFAULT_PROTEIN_PCT,
        fat_pct: DEFAULT_FAT_PCT,
    };

    pub fn new(carbs_pct: u32, protein_pct: u32, fat_pct: u32) -> Self {
        Self {
            carbs_pct,
            protein_pct,
            fat_pct,
        }
    }

    /// Value for a single category.
    pub fn get(&self, kind: MacroKind) -> u32 {
        match kind {
            MacroKind::Carbs => self.carbs_pct,
            MacroKind::Protein => self.protein_pct,
            MacroKind::Fat => self.fat_pct,
        }
    }

    /// Total of the three values, widened so large inputs cannot overflow.
    pub fn sum(&self) -> u64 {
        self.carbs_pct as u64 + self.protein_pct as u64 + self.fat_pct as u64
    }

    /// Each value as a fraction of the total, in carbs/protein/fat order.
    ///
    /// This is what a pie chart draws. An all-zero breakdown yields all zeros.
    pub fn shares(&self) -> [f64; 3] {
        let total = self.sum();
        if total == 0 {
            return [0.0; 3];
        }
        let total = total as f64;
        MacroKind::ALL.map(|kind| self.get(kind) as f64 / total)
    }

    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.carbs_pct, self.protein_pct, self.fat_pct)
    }
}

/// Result of scanning a narrative: the split plus whether it is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroExtraction {
    pub macros: MacroBreakdown,

    /// True when nothing was found and [`MacroBreakdown::DEFAULT`] was used.
    pub fell_back: bool,
}

impl Default for MacroBreakdown {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for MacroBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C:{}% P:{}% F:{}%",
            self.carbs_pct, self.protein_pct, self.fat_pct
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split() {
        let d = MacroBreakdown::default();
        assert_eq!(d.as_tuple(), (50, 30, 20));
        assert_eq!(d, MacroBreakdown::DEFAULT);
        assert_eq!(d.sum(), 100);
    }

    #[test]
    fn test_shares_of_inconsistent_sum() {
        // 40 + 0 + 0: the only present category takes the whole chart
        let b = MacroBreakdown::new(40, 0, 0);
        assert_eq!(b.shares(), [1.0, 0.0, 0.0]);

        let b = MacroBreakdown::new(60, 30, 30);
        let shares = b.shares();
        assert!((shares[0] - 0.5).abs() < 1e-9);
        assert!((shares[1] - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_sum_does_not_overflow() {
        let b = MacroBreakdown::new(u32::MAX, u32::MAX, 2);
        assert_eq!(b.sum(), 2 * u32::MAX as u64 + 2);

        let shares = b.shares();
        assert!((shares[0] - 0.5).abs() < 1e-9);
        assert!(shares[2] > 0.0 && shares[2] < 1e-9);
    }

    #[test]
    fn test_shares_all_zero() {
        assert_eq!(MacroBreakdown::new(0, 0, 0).shares(), [0.0; 3]);
    }

    #[test]
    fn test_display() {
        assert_eq!(MacroBreakdown::new(55, 20, 25).to_string(), "C:55% P:20% F:25%");
    }
}
