//! Card colouring by net worth

use serde::Serialize;

use crate::dataset::Record;

/// RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const GREEN: Self = Rgb(0, 255, 0);
    pub const ORANGE: Self = Rgb(255, 165, 0);
    pub const RED: Self = Rgb(255, 0, 0);
    pub const TEAL: Self = Rgb(0, 127, 127);

    /// CSS `rgba(...)` string with the given alpha
    pub fn rgba(&self, alpha: f32) -> String {
        format!("rgba({},{},{},{})", self.0, self.1, self.2, alpha)
    }
}

/// Colour band derived from a formatted net-worth string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetWorthBand {
    High,
    Medium,
    Low,
    Unknown,
}

impl NetWorthBand {
    /// `> 200000` is high, `> 100000` medium, anything else low.
    /// Missing or unparseable values are unknown.
    pub fn classify(net_worth: Option<&str>) -> Self {
        let Some(raw) = net_worth else {
            return NetWorthBand::Unknown;
        };
        match parse_amount(raw) {
            Some(value) if value > 200_000.0 => NetWorthBand::High,
            Some(value) if value > 100_000.0 => NetWorthBand::Medium,
            Some(_) => NetWorthBand::Low,
            None => NetWorthBand::Unknown,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            NetWorthBand::High => Rgb::GREEN,
            NetWorthBand::Medium => Rgb::ORANGE,
            NetWorthBand::Low => Rgb::RED,
            NetWorthBand::Unknown => Rgb::TEAL,
        }
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    cleaned.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Colours handed to the card builder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardStyle {
    pub band: NetWorthBand,
    pub background: String,
    pub shadow: String,
    pub border: String,
}

impl CardStyle {
    pub fn for_record(record: &Record) -> Self {
        let band = NetWorthBand::classify(record.net_worth.as_deref());
        let color = band.color();
        Self {
            band,
            background: color.rgba(0.5),
            shadow: color.rgba(0.5),
            border: color.rgba(0.25),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(NetWorthBand::classify(Some("$250,000")), NetWorthBand::High);
        assert_eq!(NetWorthBand::classify(Some("$200,000")), NetWorthBand::Medium);
        assert_eq!(NetWorthBand::classify(Some("150000.50")), NetWorthBand::Medium);
        assert_eq!(NetWorthBand::classify(Some("$100,000")), NetWorthBand::Low);
        assert_eq!(NetWorthBand::classify(Some("$12")), NetWorthBand::Low);
    }

    #[test]
    fn test_missing_or_garbage_is_unknown() {
        assert_eq!(NetWorthBand::classify(None), NetWorthBand::Unknown);
        assert_eq!(NetWorthBand::classify(Some("n/a")), NetWorthBand::Unknown);
    }

    #[test]
    fn test_card_style_alphas() {
        let record = Record::new("Ada", "UK").with_net_worth("$300,000");
        let style = CardStyle::for_record(&record);
        assert_eq!(style.band, NetWorthBand::High);
        assert_eq!(style.background, "rgba(0,255,0,0.5)");
        assert_eq!(style.border, "rgba(0,255,0,0.25)");
    }

    #[test]
    fn test_card_style_without_net_worth_is_teal() {
        let style = CardStyle::for_record(&Record::new("Grace", "US"));
        assert_eq!(style.shadow, "rgba(0,127,127,0.5)");
    }
}
