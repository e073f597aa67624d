//! Qualitative multiplier tags earned during bidding, calling, and at game end.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MultiplierTag {
    #[serde(rename = "bidder")]
    Bidder,
    #[serde(rename = "dash")]
    Dash,
    #[serde(rename = "with")]
    With,
    #[serde(rename = "withrisk")]
    WithRisk,
    #[serde(rename = "withdoublerisk")]
    WithDoubleRisk,
    #[serde(rename = "risk")]
    Risk,
    #[serde(rename = "doublerisk")]
    DoubleRisk,
    #[serde(rename = "regular")]
    Regular,
    #[serde(rename = "nocall")]
    NoCall,
    #[serde(rename = ">=8")]
    EightOrMore,
    #[serde(rename = "onlywin")]
    OnlyWin,
    #[serde(rename = "onlylose")]
    OnlyLose,
}

impl MultiplierTag {
    pub fn label(self) -> &'static str {
        match self {
            MultiplierTag::Bidder => "bidder",
            MultiplierTag::Dash => "dash",
            MultiplierTag::With => "with",
            MultiplierTag::WithRisk => "withrisk",
            MultiplierTag::WithDoubleRisk => "withdoublerisk",
            MultiplierTag::Risk => "risk",
            MultiplierTag::DoubleRisk => "doublerisk",
            MultiplierTag::Regular => "regular",
            MultiplierTag::NoCall => "nocall",
            MultiplierTag::EightOrMore => ">=8",
            MultiplierTag::OnlyWin => "onlywin",
            MultiplierTag::OnlyLose => "onlylose",
        }
    }
}

impl fmt::Display for MultiplierTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
