//! Static dashboard figures.
//!
//! The dashboard and employee-performance numbers are sample data, not
//! computed analytics (analytics is an explicit non-goal). They are typed
//! here so the presentation layer never hardcodes them.

/// One bar of a queue-status chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueStatus {
    pub category: &'static str,
    pub value: u32,
}

/// Collection queue breakdown.
pub const COLLECTION_QUEUE: &[QueueStatus] = &[
    QueueStatus { category: "Coletado concluído", value: 48 },
    QueueStatus { category: "Pago", value: 10 },
];

/// Deployment queue breakdown.
pub const DEPLOYMENT_QUEUE: &[QueueStatus] = &[
    QueueStatus { category: "Concluído", value: 40 },
    QueueStatus { category: "Em andamento", value: 25 },
    QueueStatus { category: "Assinatura pendente", value: 4 },
    QueueStatus { category: "Aguardando pendência", value: 8 },
];

/// Production queue breakdown.
pub const PRODUCTION_QUEUE: &[QueueStatus] = &[
    QueueStatus { category: "Pronto para Produção", value: 10 },
    QueueStatus { category: "Em andamento", value: 17 },
    QueueStatus { category: "Concluído", value: 40 },
    QueueStatus { category: "Cliente Sugeriu", value: 5 },
];

/// Average collection time, in days.
pub const AVG_COLLECTION_DAYS: f64 = 1.73;

/// Average deployment time, in days.
pub const AVG_DEPLOYMENT_DAYS: f64 = 0.03;

/// Overall average deployment time, in days.
pub const AVG_DEPLOYMENT_OVERALL_DAYS: f64 = 2.53;

/// Average menu assembly time, in days.
pub const AVG_ASSEMBLY_DAYS: f64 = 2.5;

/// Menus completed per month on the employee performance chart.
pub const MONTHLY_COMPLETED_MENUS: &[(&str, u32)] = &[
    ("Jan", 5),
    ("Fev", 7),
    ("Mar", 10),
    ("Abr", 8),
    ("Mai", 12),
];

/// The employee's average assembly time, in days.
pub const EMPLOYEE_AVG_ASSEMBLY_DAYS: f64 = 1.8;

/// The employee's completed menu count.
pub const EMPLOYEE_COMPLETED_MENUS: u32 = 42;
