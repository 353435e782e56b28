use model::{CustomerStatus, OrderStatus};

/// Visual weight of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge-primary",
            BadgeVariant::Secondary => "badge-ghost",
            BadgeVariant::Destructive => "badge-error",
        }
    }
}

pub fn customer_badge(status: CustomerStatus) -> BadgeVariant {
    match status {
        CustomerStatus::Active => BadgeVariant::Default,
        CustomerStatus::Inactive => BadgeVariant::Secondary,
    }
}

pub fn order_badge(status: OrderStatus) -> BadgeVariant {
    match status {
        OrderStatus::Completed => BadgeVariant::Default,
        OrderStatus::Pending => BadgeVariant::Secondary,
        OrderStatus::Cancelled => BadgeVariant::Destructive,
    }
}
