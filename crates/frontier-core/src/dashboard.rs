//! Static dashboard figures and chart series
//!
//! Nothing here is computed from the record stores: the KPI values,
//! STP rate and chart series are fixed display data.

use serde::Serialize;

use crate::error::CoreError;

/// Accent color of a KPI card, mapped to Tailwind classes by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Green,
    Amber,
    Red,
    Purple,
}

impl Accent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Amber => "amber",
            Accent::Red => "red",
            Accent::Purple => "purple",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
    pub accent: Accent,
}

/// One month of the reconciliation trend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub month: &'static str,
    pub matched: u64,
    pub unmatched: u64,
    pub exceptions: u64,
}

/// Slice of the status pie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusShare {
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumePoint {
    pub time: &'static str,
    pub volume: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EngineState {
    Active,
    Pending,
}

impl std::fmt::Display for EngineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineState::Active => write!(f, "Active"),
            EngineState::Pending => write!(f, "Pending"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineStatus {
    pub name: &'static str,
    pub state: EngineState,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExceptionItem {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub amount: &'static str,
    pub priority: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsFigure {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

/// Everything the dashboard page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub kpis: Vec<KpiCard>,
    pub monthly_trend: Vec<TrendPoint>,
    pub status_shares: Vec<StatusShare>,
    pub volume_24h: Vec<VolumePoint>,
    pub engines: Vec<EngineStatus>,
    pub exceptions: Vec<ExceptionItem>,
    pub analytics: Vec<AnalyticsFigure>,
}

impl Default for DashboardSnapshot {
    fn default() -> Self {
        Self::seeded()
    }
}

impl DashboardSnapshot {
    pub fn seeded() -> Self {
        let kpi = |title, value, caption, accent| KpiCard {
            title,
            value,
            caption,
            accent,
        };
        let month = |month, matched, unmatched, exceptions| TrendPoint {
            month,
            matched,
            unmatched,
            exceptions,
        };
        let volume = |time, volume| VolumePoint { time, volume };

        Self {
            kpis: vec![
                kpi("Total Volume", "$2.4M", "+12.5% from last month", Accent::Blue),
                kpi("Matched", "89.2%", "+2.1% improvement", Accent::Green),
                kpi("Pending", "1,247", "-15% from yesterday", Accent::Amber),
                kpi("Exceptions", "52", "Requires attention", Accent::Red),
                kpi("STP Rate", "94.8%", "Straight-through processing", Accent::Purple),
            ],
            monthly_trend: vec![
                month("Jan", 45000, 2500, 800),
                month("Feb", 52000, 1800, 600),
                month("Mar", 48000, 2200, 750),
                month("Apr", 55000, 1500, 450),
                month("May", 62000, 1200, 380),
                month("Jun", 58000, 1600, 520),
            ],
            status_shares: vec![
                StatusShare { name: "Matched", value: 89.2, color: "#22c55e" },
                StatusShare { name: "Pending", value: 7.8, color: "#f59e0b" },
                StatusShare { name: "Exceptions", value: 3.0, color: "#ef4444" },
            ],
            volume_24h: vec![
                volume("00:00", 1200),
                volume("04:00", 800),
                volume("08:00", 3400),
                volume("12:00", 5600),
                volume("16:00", 4200),
                volume("20:00", 2800),
            ],
            engines: vec![
                EngineStatus { name: "Credit Card Reconciliation", state: EngineState::Active },
                EngineStatus { name: "Bank Statement Processing", state: EngineState::Active },
                EngineStatus { name: "ACH Processing", state: EngineState::Pending },
            ],
            exceptions: vec![
                ExceptionItem {
                    id: "EX001",
                    kind: "Amount Mismatch",
                    amount: "$1,250.00",
                    priority: "High Priority",
                },
                ExceptionItem {
                    id: "EX002",
                    kind: "Missing Reference",
                    amount: "$750.50",
                    priority: "Medium Priority",
                },
                ExceptionItem {
                    id: "EX003",
                    kind: "Date Variance",
                    amount: "$2,100.00",
                    priority: "Low Priority",
                },
            ],
            analytics: vec![
                AnalyticsFigure { value: "96.2%", label: "Accuracy Rate", accent: Accent::Blue },
                AnalyticsFigure { value: "2.3s", label: "Avg Processing Time", accent: Accent::Green },
                AnalyticsFigure { value: "$50M", label: "Monthly Volume", accent: Accent::Purple },
            ],
        }
    }
}

/// Tabs below the KPI cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Reconciliation,
    Exceptions,
    Analytics,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Overview,
        DashboardTab::Reconciliation,
        DashboardTab::Exceptions,
        DashboardTab::Analytics,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::Reconciliation => "reconciliation",
            DashboardTab::Exceptions => "exceptions",
            DashboardTab::Analytics => "analytics",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Reconciliation => "Reconciliation",
            DashboardTab::Exceptions => "Exceptions",
            DashboardTab::Analytics => "Analytics",
        }
    }
}

impl std::str::FromStr for DashboardTab {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DashboardTab::ALL
            .into_iter()
            .find(|tab| tab.slug() == s)
            .ok_or_else(|| CoreError::UnknownTab { tab: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_contents() {
        let snapshot = DashboardSnapshot::seeded();
        assert_eq!(snapshot.kpis.len(), 5);
        assert_eq!(snapshot.kpis[4].value, "94.8%");
        assert_eq!(snapshot.monthly_trend.len(), 6);
        assert_eq!(snapshot.monthly_trend[4].matched, 62000);
        let share: f64 = snapshot.status_shares.iter().map(|s| s.value).sum();
        assert!((share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let value = serde_json::to_value(DashboardSnapshot::seeded()).unwrap();
        assert!(value["monthlyTrend"].is_array());
        assert_eq!(value["exceptions"][0]["type"], "Amount Mismatch");
        assert_eq!(value["engines"][2]["state"], "Pending");
    }

    #[test]
    fn test_tab_parsing() {
        assert_eq!("analytics".parse::<DashboardTab>().unwrap(), DashboardTab::Analytics);
        assert!(matches!(
            "settings".parse::<DashboardTab>(),
            Err(CoreError::UnknownTab { .. })
        ));
    }
}
