use serde::{Deserialize, Serialize};

use impact_core::models::MarginImpact;

/// Contract value and net profit for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFigures {
    pub contract_value: f64,
    pub net_profit: f64,
}

/// Original vs impacted figures, the data behind the comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub original: ScenarioFigures,
    pub impacted: ScenarioFigures,
    /// `margin_after >= healthy_margin_pct`; drives the profit bar color.
    pub profit_healthy: bool,
}

impl ScenarioComparison {
    pub fn from_impact(contract_value: f64, margin: &MarginImpact, healthy_margin_pct: f64) -> Self {
        Self {
            original: ScenarioFigures {
                contract_value,
                net_profit: margin.original_profit,
            },
            impacted: ScenarioFigures {
                contract_value: margin.final_value,
                net_profit: margin.new_profit,
            },
            profit_healthy: margin.margin_after >= healthy_margin_pct,
        }
    }

    /// Headroom for a chart axis: the larger contract value plus 25%.
    pub fn axis_max(&self) -> f64 {
        self.original
            .contract_value
            .max(self.impacted.contract_value)
            * 1.25
    }
}
