//! Finding where a calculation has to be recomputed.

use tracing::{debug, warn};

use shared::repair::inconsistent_time;
use shared::CalculationRepair;

use crate::error::Result;
use crate::request::RequestOptions;
use crate::services::Services;

/// Loads the tuples of a calculation and the candles of its chart and
/// returns the earliest time from which the tuples are not contiguous.
///
/// Yields `None` when the series are consistent, and also when the
/// calculation, its chart or the chart's time range cannot be found.
pub async fn calculation_repair(services: &Services, calculation_id: i64) -> Result<Option<CalculationRepair>> {
    let Some(calculation) = services.calculations.find(calculation_id).await? else {
        warn!(calculation_id, "Calculation not found");
        return Ok(None);
    };
    let Some(chart_ref) = calculation.chart else {
        warn!(calculation_id, "Calculation has no chart");
        return Ok(None);
    };
    let Some(chart) = services.charts.find(chart_ref.id).await? else {
        warn!(calculation_id, chart_id = chart_ref.id, "Chart not found");
        return Ok(None);
    };
    let time_range = match chart.time_range {
        Some(reference) => services.time_ranges.find(reference.id).await?,
        None => None,
    };
    let Some(range_size) = time_range.and_then(|t| t.range_size) else {
        warn!(calculation_id, chart_id = chart.id, "Chart has no range size");
        return Ok(None);
    };

    // The criteria are a hint only; backends without filtering return every row.
    let tuples: Vec<_> = services
        .tuples
        .query(&RequestOptions::new().filter("calculationId.equals", calculation_id))
        .await?
        .items
        .into_iter()
        .filter(|t| t.calculation.map(|r| r.id) == Some(calculation_id))
        .collect();
    let ohlcs: Vec<_> = services
        .ohlcs
        .query(&RequestOptions::new().filter("chartId.equals", chart.id))
        .await?
        .items
        .into_iter()
        .filter(|o| o.chart.map(|r| r.id) == Some(chart.id))
        .collect();
    debug!(calculation_id, tuples = tuples.len(), ohlcs = ohlcs.len(), range_size, "Checking calculation");

    Ok(inconsistent_time(
        tuples.iter().filter_map(|t| t.time),
        ohlcs.iter().filter_map(|o| o.time),
        range_size,
    ))
}
