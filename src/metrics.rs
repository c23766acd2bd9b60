//! Dashboard KPI derivation
//!
//! Pure computations over store snapshots; nothing here is cached. The
//! admin dashboard counts the review queue and portal health, the partner
//! dashboard narrows everything to one company.

use serde::Serialize;

use crate::core::error::PortalResult;
use crate::entities::{RequestStatus, StockStatus, TicketStatus, UserStatus};
use crate::store::PortalStore;

/// The KPI row a dashboard renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    /// Requests waiting on an admin (submitted or in review)
    pub pending_requests: usize,

    /// Total catalog value of approved requests
    pub approved_value: f64,

    /// Tickets not yet resolved or closed
    pub open_tickets: usize,

    /// Accounts with active status
    pub active_users: usize,

    /// Products low on stock or out of stock
    pub stock_alerts: usize,

    /// Unread notifications (the topbar badge)
    pub unread_notifications: usize,
}

impl DashboardMetrics {
    /// KPIs across the whole portal (the admin dashboard)
    pub fn for_admin(store: &PortalStore) -> PortalResult<Self> {
        let requests = store.requests()?;
        let tickets = store.tickets()?;
        let users = store.users()?;
        let products = store.products()?;

        Ok(Self {
            pending_requests: requests
                .iter()
                .filter(|r| {
                    matches!(
                        r.status,
                        RequestStatus::Submitted | RequestStatus::InReview
                    )
                })
                .count(),
            approved_value: requests
                .iter()
                .filter(|r| r.status == RequestStatus::Approved)
                .map(|r| r.total())
                .sum(),
            open_tickets: tickets
                .iter()
                .filter(|t| {
                    matches!(t.status, TicketStatus::Open | TicketStatus::InProgress)
                })
                .count(),
            active_users: users
                .iter()
                .filter(|u| u.status == UserStatus::Active)
                .count(),
            stock_alerts: products
                .iter()
                .filter(|p| p.stock_status != StockStatus::InStock)
                .count(),
            unread_notifications: store.unread_notifications()?,
        })
    }

    /// KPIs narrowed to one partner company (the partner dashboard)
    pub fn for_partner(store: &PortalStore, company: &str) -> PortalResult<Self> {
        let requests = store.requests_for_company(company)?;
        let tickets = store.tickets()?;
        let users = store.users()?;
        let products = store.products()?;

        Ok(Self {
            pending_requests: requests
                .iter()
                .filter(|r| {
                    matches!(
                        r.status,
                        RequestStatus::Submitted | RequestStatus::InReview
                    )
                })
                .count(),
            approved_value: requests
                .iter()
                .filter(|r| r.status == RequestStatus::Approved)
                .map(|r| r.total())
                .sum(),
            open_tickets: tickets
                .iter()
                .filter(|t| {
                    matches!(t.status, TicketStatus::Open | TicketStatus::InProgress)
                })
                .count(),
            active_users: users
                .iter()
                .filter(|u| u.company == company && u.status == UserStatus::Active)
                .count(),
            stock_alerts: products
                .iter()
                .filter(|p| p.stock_status != StockStatus::InStock)
                .count(),
            unread_notifications: store.unread_notifications()?,
        })
    }
}
