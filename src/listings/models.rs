use maud::{html, Markup, Render};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// listing
//  ├── property_name       (display)
//  ├── property_price      (display, number or string)
//  ├── beds / baths        (display)
//  ├── location            "(lat,lon)", the only parsed field
//  ├── property_location   (display, address)
//  └── no_of_shares        (display, fractional ownership)
//
// The backend does not promise types, so every field is kept as raw JSON
// and only interpreted at render time.

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Listing {
    pub property_name: DisplayValue,
    pub property_price: DisplayValue,
    pub beds: DisplayValue,
    pub baths: DisplayValue,
    pub location: DisplayValue,
    pub property_location: DisplayValue,
    pub no_of_shares: DisplayValue,
}

/// A wire value shown verbatim in a popup.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct DisplayValue(pub Value);

impl DisplayValue {
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    pub fn is_missing(&self) -> bool {
        self.0.is_null()
    }
}

impl From<&str> for DisplayValue {
    fn from(s: &str) -> Self {
        DisplayValue(Value::String(s.to_string()))
    }
}

impl From<i64> for DisplayValue {
    fn from(n: i64) -> Self {
        DisplayValue(Value::from(n))
    }
}

impl From<f64> for DisplayValue {
    fn from(n: f64) -> Self {
        DisplayValue(Value::from(n))
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::Null => write!(f, "n/a"),
            Value::String(s) => write!(f, "{s}"),
            Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
                (Some(i), _, _) => write!(f, "{i}"),
                (_, Some(u), _) => write!(f, "{u}"),
                // f64 Display drops a trailing ".0", so 2.0 shows as "2"
                (_, _, Some(x)) => write!(f, "{x}"),
                _ => write!(f, "{n}"),
            },
            other => write!(f, "{other}"),
        }
    }
}

impl Render for DisplayValue {
    fn render(&self) -> Markup {
        html! { (self.to_string()) }
    }
}
