use serde::{Deserialize, Serialize};

/// Semantic type of a property value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Boolean,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Percent,
    Watt,
    Volt,
    Ampere,
    Celsius,
    // Spelling is part of the published vocabulary
    Farenheit,
    Lux,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Percent => "percent",
            Self::Watt => "watt",
            Self::Volt => "volt",
            Self::Ampere => "ampere",
            Self::Celsius => "celsius",
            Self::Farenheit => "farenheit",
            Self::Lux => "lux",
        }
    }

    /// Maps the unit string a node reports for a temperature reading.
    pub fn from_temperature_units(units: Option<&str>) -> Option<Self> {
        match units {
            Some("F") => Some(Self::Farenheit),
            Some("C") => Some(Self::Celsius),
            _ => None,
        }
    }
}

/// Description of a property: type plus optional unit and bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescription {
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
}

impl PropertyDescription {
    pub fn boolean() -> Self {
        Self {
            value_type: ValueType::Boolean,
            unit: None,
            minimum: None,
            maximum: None,
        }
    }

    pub fn number() -> Self {
        Self {
            value_type: ValueType::Number,
            ..Self::boolean()
        }
    }

    /// Percentage in the inclusive range 0-100
    pub fn percent() -> Self {
        Self::number().with_unit(Unit::Percent).with_bounds(0.0, 100.0)
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn with_optional_unit(mut self, unit: Option<Unit>) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_bounds(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_temperature_units() {
        assert_eq!(Unit::from_temperature_units(Some("F")), Some(Unit::Farenheit));
        assert_eq!(Unit::from_temperature_units(Some("C")), Some(Unit::Celsius));
        assert_eq!(Unit::from_temperature_units(Some("K")), None);
        assert_eq!(Unit::from_temperature_units(None), None);
    }

    #[test]
    fn test_percent_description_json() {
        let desc = PropertyDescription::percent();
        assert_eq!(
            serde_json::to_value(&desc).unwrap(),
            json!({"type": "number", "unit": "percent", "minimum": 0.0, "maximum": 100.0})
        );
    }

    #[test]
    fn test_boolean_description_omits_empty_fields() {
        let desc = PropertyDescription::boolean();
        assert_eq!(serde_json::to_value(&desc).unwrap(), json!({"type": "boolean"}));
    }
}
