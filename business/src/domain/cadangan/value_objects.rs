use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CadanganType {
    Cadangan,
    Aduan,
    Penghargaan,
    Lain,
}

impl std::fmt::Display for CadanganType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CadanganType::Cadangan => write!(f, "cadangan"),
            CadanganType::Aduan => write!(f, "aduan"),
            CadanganType::Penghargaan => write!(f, "penghargaan"),
            CadanganType::Lain => write!(f, "lain"),
        }
    }
}

impl std::str::FromStr for CadanganType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cadangan" => Ok(CadanganType::Cadangan),
            "aduan" => Ok(CadanganType::Aduan),
            "penghargaan" => Ok(CadanganType::Penghargaan),
            "lain" => Ok(CadanganType::Lain),
            _ => Err(format!("Invalid cadangan type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_what_it_displays() {
        for kind in [
            CadanganType::Cadangan,
            CadanganType::Aduan,
            CadanganType::Penghargaan,
            CadanganType::Lain,
        ] {
            assert_eq!(kind.to_string().parse::<CadanganType>(), Ok(kind));
        }
    }

    #[test]
    fn should_reject_unknown_type() {
        assert!("complaint".parse::<CadanganType>().is_err());
    }
}
