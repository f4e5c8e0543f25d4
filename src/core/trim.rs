/// Trim levels offered on the configuration panel.
///
/// Each level is a fixed on/off vector over the four toggleable system
/// layers; hovering a level applies its vector directly, with no transition
/// and no memory of earlier levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrimLevel {
    OneK,
    OneKPlus,
    TwoK,
    TwoKPlus,
    ThreeK,
}

impl TrimLevel {
    pub const ALL: [TrimLevel; 5] = [
        TrimLevel::OneK,
        TrimLevel::OneKPlus,
        TrimLevel::TwoK,
        TrimLevel::TwoKPlus,
        TrimLevel::ThreeK,
    ];

    /// Panel caption for this level.
    pub fn label(self) -> &'static str {
        match self {
            TrimLevel::OneK => "1K",
            TrimLevel::OneKPlus => "1K+",
            TrimLevel::TwoK => "2K",
            TrimLevel::TwoKPlus => "2K+",
            TrimLevel::ThreeK => "3K",
        }
    }

    /// Visibility vector over system layers 0..3 for this level.
    pub fn layer_visibility(self) -> [bool; 4] {
        match self {
            TrimLevel::OneK => [false, false, false, false],
            TrimLevel::OneKPlus => [true, false, false, false],
            TrimLevel::TwoK => [false, true, false, false],
            TrimLevel::TwoKPlus => [true, true, false, false],
            TrimLevel::ThreeK => [true, true, true, false],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_match_the_trim_table() {
        assert_eq!(TrimLevel::OneK.layer_visibility(), [false, false, false, false]);
        assert_eq!(TrimLevel::OneKPlus.layer_visibility(), [true, false, false, false]);
        assert_eq!(TrimLevel::TwoK.layer_visibility(), [false, true, false, false]);
        assert_eq!(TrimLevel::TwoKPlus.layer_visibility(), [true, true, false, false]);
        assert_eq!(TrimLevel::ThreeK.layer_visibility(), [true, true, true, false]);
    }

    #[test]
    fn layer_three_is_never_enabled() {
        for level in TrimLevel::ALL {
            assert!(!level.layer_visibility()[3]);
        }
    }

    #[test]
    fn labels_match_panel_captions() {
        let labels: Vec<_> = TrimLevel::ALL.iter().map(|level| level.label()).collect();
        assert_eq!(labels, ["1K", "1K+", "2K", "2K+", "3K"]);
    }
}
