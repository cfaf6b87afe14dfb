use serde::{Deserialize, Serialize};

/// Maintenance service categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    OilChange,
    TireReplacement,
    BrakeService,
    ChainMaintenance,
    ValveAdjustment,
    SparkPlug,
    AirFilter,
    CoolantChange,
    GeneralInspection,
    Custom,
}

impl ServiceType {
    /// Wire code of the service type
    pub fn code(&self) -> &'static str {
        match self {
            ServiceType::OilChange => "oil_change",
            ServiceType::TireReplacement => "tire_replacement",
            ServiceType::BrakeService => "brake_service",
            ServiceType::ChainMaintenance => "chain_maintenance",
            ServiceType::ValveAdjustment => "valve_adjustment",
            ServiceType::SparkPlug => "spark_plug",
            ServiceType::AirFilter => "air_filter",
            ServiceType::CoolantChange => "coolant_change",
            ServiceType::GeneralInspection => "general_inspection",
            ServiceType::Custom => "custom",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceType::OilChange => "Oil Change",
            ServiceType::TireReplacement => "Tire Replacement",
            ServiceType::BrakeService => "Brake Service",
            ServiceType::ChainMaintenance => "Chain Maintenance",
            ServiceType::ValveAdjustment => "Valve Adjustment",
            ServiceType::SparkPlug => "Spark Plug",
            ServiceType::AirFilter => "Air Filter",
            ServiceType::CoolantChange => "Coolant Change",
            ServiceType::GeneralInspection => "General Inspection",
            ServiceType::Custom => "Custom",
        }
    }

    /// Icon shown next to the service in lists
    pub fn icon(&self) -> &'static str {
        match self {
            ServiceType::OilChange => "🛢️",
            ServiceType::TireReplacement => "🛞",
            ServiceType::BrakeService => "🛑",
            ServiceType::ChainMaintenance => "⛓️",
            ServiceType::ValveAdjustment => "🔧",
            ServiceType::SparkPlug => "⚡",
            ServiceType::AirFilter => "🌪️",
            ServiceType::CoolantChange => "❄️",
            ServiceType::GeneralInspection => "🔍",
            ServiceType::Custom => "🔧",
        }
    }

    /// All service types
    pub fn all() -> Vec<ServiceType> {
        vec![
            ServiceType::OilChange,
            ServiceType::TireReplacement,
            ServiceType::BrakeService,
            ServiceType::ChainMaintenance,
            ServiceType::ValveAdjustment,
            ServiceType::SparkPlug,
            ServiceType::AirFilter,
            ServiceType::CoolantChange,
            ServiceType::GeneralInspection,
            ServiceType::Custom,
        ]
    }

    /// Parse from the wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "oil_change" => Some(ServiceType::OilChange),
            "tire_replacement" => Some(ServiceType::TireReplacement),
            "brake_service" => Some(ServiceType::BrakeService),
            "chain_maintenance" => Some(ServiceType::ChainMaintenance),
            "valve_adjustment" => Some(ServiceType::ValveAdjustment),
            "spark_plug" => Some(ServiceType::SparkPlug),
            "air_filter" => Some(ServiceType::AirFilter),
            "coolant_change" => Some(ServiceType::CoolantChange),
            "general_inspection" => Some(ServiceType::GeneralInspection),
            "custom" => Some(ServiceType::Custom),
            _ => None,
        }
    }
}

impl ToString for ServiceType {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
