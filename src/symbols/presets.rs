//! Built-in symbol lists.

use serde::{Deserialize, Serialize};

/// Metal symbols, in the order the alloy reports list them.
pub const METALS: &[&str] = &[
    "Mg", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Y", "Zr", "Nb", "Mo", "Tc", "Ru",
    "Rh", "Pd", "Ag", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Rf", "Db", "Sg", "Bh",
    "Hs", "Mt", "Ds", "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og", "Al", "Ga", "In", "Sn", "Tl",
    "Pb", "Bi", "Po", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm",
    "Yb", "Lu", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", "Md", "No",
    "Lr",
];

/// Every element of the periodic table, by atomic number.
pub const ELEMENTS: &[&str] = &[
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Named symbol list selectable from config or the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Metallic elements only
    #[default]
    Metals,
    /// The full periodic table
    Elements,
}

impl Preset {
    #[must_use]
    pub const fn symbols(self) -> &'static [&'static str] {
        match self {
            Self::Metals => METALS,
            Self::Elements => ELEMENTS,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Metals => "metals",
            Self::Elements => "elements",
        }
    }

    /// Chart title used when `chart.title` is not configured.
    #[must_use]
    pub const fn chart_title(self) -> &'static str {
        match self {
            Self::Metals => "Metal Element Counts (Count >= 1)",
            Self::Elements => CUSTOM_CHART_TITLE,
        }
    }
}

/// Chart title for the full table or an explicit symbol list.
pub const CUSTOM_CHART_TITLE: &str = "Element Counts (Count >= 1)";
