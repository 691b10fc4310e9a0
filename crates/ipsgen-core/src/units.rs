use std::fmt;

use crate::errors::UnsupportedUnit;

/// Mass units observed in manifest weight columns, plus the metric
/// neighbours carriers occasionally switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MassUnit {
    Milligram,
    Gram,
    Kilogram,
    Tonne,
    Ounce,
    Pound,
}

impl MassUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            MassUnit::Milligram => "mg",
            MassUnit::Gram => "g",
            MassUnit::Kilogram => "kg",
            MassUnit::Tonne => "t",
            MassUnit::Ounce => "oz",
            MassUnit::Pound => "lb",
        }
    }

    fn kilograms_per_unit(self) -> f64 {
        match self {
            MassUnit::Milligram => 1e-6,
            MassUnit::Gram => 1e-3,
            MassUnit::Kilogram => 1.0,
            MassUnit::Tonne => 1000.0,
            // international avoirdupois definitions
            MassUnit::Ounce => 0.028_349_523_125,
            MassUnit::Pound => 0.453_592_37,
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MassUnit {
    type Error = UnsupportedUnit;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mg" | "milligram" | "milligrams" => Ok(MassUnit::Milligram),
            "g" | "gram" | "grams" => Ok(MassUnit::Gram),
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(MassUnit::Kilogram),
            "t" | "tonne" | "tonnes" => Ok(MassUnit::Tonne),
            "oz" | "ounce" | "ounces" => Ok(MassUnit::Ounce),
            "lb" | "lbs" | "pound" | "pounds" => Ok(MassUnit::Pound),
            _ => Err(UnsupportedUnit {
                unit: value.trim().to_string(),
            }),
        }
    }
}

/// Linearizes through kilograms. Identity conversions return the input
/// unchanged so integer-valued floats survive bit-exact.
pub fn convert(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.kilograms_per_unit() / to.kilograms_per_unit()
}

pub fn to_kilograms(value: f64, from: MassUnit) -> f64 {
    convert(value, from, MassUnit::Kilogram)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_conversion_is_exact() {
        assert_eq!(convert(5.0, MassUnit::Kilogram, MassUnit::Kilogram), 5.0);
        assert_eq!(convert(2.5, MassUnit::Pound, MassUnit::Pound), 2.5);
    }

    #[test]
    fn converts_common_units_to_kilograms() {
        assert_eq!(to_kilograms(250.0, MassUnit::Gram), 0.25);
        assert_eq!(to_kilograms(1.0, MassUnit::Pound), 0.453_592_37);
        assert_eq!(to_kilograms(0.5, MassUnit::Tonne), 500.0);
    }

    #[test]
    fn round_trips_within_float_tolerance() {
        let units = [
            MassUnit::Milligram,
            MassUnit::Gram,
            MassUnit::Kilogram,
            MassUnit::Tonne,
            MassUnit::Ounce,
            MassUnit::Pound,
        ];
        for from in units {
            for to in units {
                let v = 3.7;
                let back = convert(convert(v, from, to), to, from);
                assert!(
                    (back - v).abs() < 1e-9,
                    "{from} -> {to} round trip drifted: {back}"
                );
            }
        }
    }

    #[test]
    fn parses_unit_aliases() {
        assert_eq!(MassUnit::try_from("kg").unwrap(), MassUnit::Kilogram);
        assert_eq!(MassUnit::try_from(" KG ").unwrap(), MassUnit::Kilogram);
        assert_eq!(MassUnit::try_from("Kilograms").unwrap(), MassUnit::Kilogram);
        assert_eq!(MassUnit::try_from("lbs").unwrap(), MassUnit::Pound);
        assert_eq!(MassUnit::try_from("Ounce").unwrap(), MassUnit::Ounce);
    }

    #[test]
    fn rejects_unknown_units() {
        let err = MassUnit::try_from("stone").unwrap_err();
        assert_eq!(err.unit, "stone");
        assert!(MassUnit::try_from("litre").is_err());
        assert!(MassUnit::try_from("").is_err());
    }
}
