//! Fixed sample records for every entity.
//!
//! Each entity gets a record with only the required data, one with part of
//! the optional fields, one with all scalar fields and a new record.

use chrono::{DateTime, TimeZone, Utc};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

pub mod asset {
    use super::at;
    use crate::entity::{Asset, NewAsset};

    pub fn required_data() -> Asset {
        Asset {
            id: 64724,
            ..Default::default()
        }
    }

    pub fn partial_data() -> Asset {
        Asset {
            id: 9020,
            alternative_name: Some("Borders".to_string()),
            display_decimals: Some(44342),
            ..Default::default()
        }
    }

    pub fn full_data() -> Asset {
        Asset {
            id: 63014,
            name: Some("Brand".to_string()),
            asset_class: Some("Hat".to_string()),
            alternative_name: Some("Plastic Kids Michigan".to_string()),
            decimals: Some(26259),
            display_decimals: Some(65783),
            last_checked: Some(at(2022, 10, 24, 23, 24)),
        }
    }

    pub fn new_data() -> NewAsset {
        NewAsset::default()
    }
}

pub mod calculation {
    use super::at;
    use crate::entity::{Calculation, NewCalculation};

    pub fn required_data() -> Calculation {
        Calculation {
            id: 39089,
            ..Default::default()
        }
    }

    pub fn partial_data() -> Calculation {
        Calculation {
            id: 80210,
            last: Some(at(2022, 10, 25, 6, 54)),
            ..Default::default()
        }
    }

    pub fn full_data() -> Calculation {
        Calculation {
            id: 3161,
            name: Some("Strategist navigate mint".to_string()),
            last: Some(at(2022, 10, 25, 3, 44)),
            disabled: Some(true),
            chart: None,
        }
    }

    pub fn new_data() -> NewCalculation {
        NewCalculation::default()
    }
}

pub mod chart {
    use super::at;
    use crate::entity::{Chart, NewChart};

    pub fn required_data() -> Chart {
        Chart {
            id: 11304,
            ..Default::default()
        }
    }

    pub fn partial_data() -> Chart {
        Chart {
            id: 85859,
            name: Some("adapter".to_string()),
            max_count: Some(58423),
            disabled: Some(true),
            ..Default::default()
        }
    }

    pub fn full_data() -> Chart {
        Chart {
            id: 9544,
            name: Some("payment".to_string()),
            last: Some(at(2022, 10, 25, 4, 47)),
            max_count: Some(90841),
            disabled: Some(false),
            ..Default::default()
        }
    }

    pub fn new_data() -> NewChart {
        NewChart::default()
    }
}

pub mod fee {
    use rust_decimal::Decimal;

    use crate::entity::{Fee, NewFee};

    pub fn required_data() -> Fee {
        Fee {
            id: 94452,
            ..Default::default()
        }
    }

    pub fn partial_data() -> Fee {
        Fee {
            id: 52810,
            volume: Some(76538),
            ..Default::default()
        }
    }

    pub fn full_data() -> Fee {
        Fee {
            id: 4573,
            volume: Some(16810),
            percent: Some(Decimal::from(2364)),
            pair: None,
        }
    }

    pub fn new_data() -> NewFee {
        NewFee::default()
    }
}

pub mod ohlc {
    use rust_decimal::Decimal;

    use super::at;
    use crate::entity::{NewOhlc, Ohlc};

    pub fn required_data() -> Ohlc {
        Ohlc {
            id: 35747,
            ..Default::default()
        }
    }

    pub fn partial_data() -> Ohlc {
        Ohlc {
            id: 9551,
            high: Some(Decimal::from(48664)),
            close: Some(Decimal::from(82279)),
            volume_weighted_average_price: Some(Decimal::from(62815)),
            volume: Some(Decimal::from(45927)),
            ..Default::default()
        }
    }

    pub fn full_data() -> Ohlc {
        Ohlc {
            id: 31656,
            time: Some(at(2022, 10, 25, 1, 10)),
            open: Some(Decimal::from(79954)),
            high: Some(Decimal::from(76470)),
            low: Some(Decimal::from(63169)),
            close: Some(Decimal::from(56904)),
            volume_weighted_average_price: Some(Decimal::from(61289)),
            volume: Some(Decimal::from(66745)),
            count: Some(65910),
            chart: None,
        }
    }

    pub fn new_data() -> NewOhlc {
        NewOhlc::default()
    }
}

pub mod pair {
    use crate::entity::{NewPair, Pair};

    pub fn required_data() -> Pair {
        Pair {
            id: 79233,
            ..Default::default()
        }
    }

    pub fn partial_data() -> Pair {
        Pair {
            id: 30836,
            lot: Some("Aruban".to_string()),
            lot_decimals: Some(500),
            lot_multiplier: Some(62491),
            ..Default::default()
        }
    }

    pub fn full_data() -> Pair {
        Pair {
            id: 81911,
            name: Some("Tobago blockchains".to_string()),
            altname: Some("primary leading-edge Regional".to_string()),
            web_socket_pair_name: Some("visualize".to_string()),
            lot: Some("Eritrea Personal Chilean".to_string()),
            pair_decimal: Some(82908),
            lot_decimals: Some(6909),
            lot_multiplier: Some(45444),
            ..Default::default()
        }
    }

    pub fn new_data() -> NewPair {
        NewPair::default()
    }
}

pub mod time_range {
    use crate::entity::{NewTimeRange, TimeRange};

    pub fn required_data() -> TimeRange {
        TimeRange {
            id: 9567,
            ..Default::default()
        }
    }

    pub fn partial_data() -> TimeRange {
        TimeRange {
            id: 47621,
            range_size: Some(42037),
            duration: Some("9924".to_string()),
            description: Some("Market Junctions Reactive".to_string()),
            ..Default::default()
        }
    }

    pub fn full_data() -> TimeRange {
        TimeRange {
            id: 53389,
            name: Some("Handmade".to_string()),
            range_size: Some(19986),
            duration: Some("60870".to_string()),
            description: Some("Planner".to_string()),
        }
    }

    pub fn new_data() -> NewTimeRange {
        NewTimeRange::default()
    }
}

pub mod touple {
    use rust_decimal::Decimal;

    use super::at;
    use crate::entity::{NewTouple, Touple};

    pub fn required_data() -> Touple {
        Touple {
            id: 68520,
            ..Default::default()
        }
    }

    pub fn partial_data() -> Touple {
        Touple {
            id: 51460,
            ..Default::default()
        }
    }

    pub fn full_data() -> Touple {
        Touple {
            id: 93540,
            computation: Some(Decimal::from(21576)),
            time: Some(at(2022, 10, 25, 2, 9)),
            ..Default::default()
        }
    }

    pub fn new_data() -> NewTouple {
        NewTouple::default()
    }
}

pub mod tuple {
    use rust_decimal::Decimal;

    use super::at;
    use crate::entity::{NewTuple, Tuple};

    pub fn required_data() -> Tuple {
        Tuple {
            id: 60425,
            ..Default::default()
        }
    }

    pub fn partial_data() -> Tuple {
        Tuple {
            id: 69383,
            ..Default::default()
        }
    }

    pub fn full_data() -> Tuple {
        Tuple {
            id: 55794,
            computation: Some(Decimal::from(94286)),
            time: Some(at(2022, 10, 24, 18, 4)),
            ..Default::default()
        }
    }

    pub fn new_data() -> NewTuple {
        NewTuple::default()
    }
}
