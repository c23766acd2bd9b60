//! The demo dataset the portal ships with
//!
//! Mirrors the catalog, request queue, ticket list, and user roster a
//! fresh portal instance displays. Timestamps are fixed so the seeded
//! lists sort the same way on every run; ids are generated at seed time
//! and stay stable for the life of the store.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::events::{ActivityEntry, ActivityFeed, ActivityKind};
use crate::entities::{
    Notification, NotificationKind, Priority, Product, ProductStatus, QuoteRequest,
    RequestComment, RequestItem, RequestStatus, StockStatus, Ticket, TicketCategory,
    TicketPriority, TicketStatus, User, UserRole, UserStatus,
};

use super::StoreState;

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("seed timestamp is valid RFC 3339")
}

struct ProductSpec {
    sku: &'static str,
    name: &'static str,
    category: &'static str,
    brand: &'static str,
    stock: i64,
    unit_price: f64,
    moq: i64,
    status: ProductStatus,
}

const PRODUCT_SPECS: &[ProductSpec] = &[
    ProductSpec { sku: "ELC-4821", name: "Industrial Relay Module 24V", category: "Electronics", brand: "Siemens", stock: 1240, unit_price: 84.5, moq: 10, status: ProductStatus::Active },
    ProductSpec { sku: "HYD-1190", name: "Hydraulic Pressure Gauge 0-400 Bar", category: "Hydraulics", brand: "Parker", stock: 340, unit_price: 132.0, moq: 5, status: ProductStatus::Active },
    ProductSpec { sku: "PNE-7734", name: "Pneumatic Cylinder 50mm Bore", category: "Pneumatics", brand: "Festo", stock: 18, unit_price: 296.0, moq: 2, status: ProductStatus::Active },
    ProductSpec { sku: "ELC-5502", name: "Variable Frequency Drive 3HP", category: "Electronics", brand: "ABB", stock: 0, unit_price: 1245.0, moq: 1, status: ProductStatus::Active },
    ProductSpec { sku: "FAS-3318", name: "Stainless Steel Hex Bolt M12x80", category: "Fasteners", brand: "Hilti", stock: 8500, unit_price: 2.4, moq: 100, status: ProductStatus::Active },
    ProductSpec { sku: "HYD-2240", name: "Hydraulic Hose Assembly 1/2\" 3m", category: "Hydraulics", brand: "Gates", stock: 420, unit_price: 48.75, moq: 10, status: ProductStatus::Active },
    ProductSpec { sku: "ELC-6610", name: "PLC Controller Unit S7-1200", category: "Electronics", brand: "Siemens", stock: 56, unit_price: 3420.0, moq: 1, status: ProductStatus::Active },
    ProductSpec { sku: "SAF-1122", name: "Industrial Safety Gloves EN388", category: "Safety", brand: "Honeywell", stock: 2200, unit_price: 12.5, moq: 50, status: ProductStatus::Active },
    ProductSpec { sku: "PNE-8821", name: "Air Preparation Unit FRL 1/4\"", category: "Pneumatics", brand: "SMC", stock: 8, unit_price: 189.0, moq: 3, status: ProductStatus::Active },
    ProductSpec { sku: "TOL-4451", name: "Torque Wrench 40-200 Nm", category: "Tools", brand: "Snap-on", stock: 0, unit_price: 485.0, moq: 1, status: ProductStatus::Discontinued },
    ProductSpec { sku: "ELC-7790", name: "Proximity Sensor Inductive 8mm", category: "Electronics", brand: "Omron", stock: 670, unit_price: 38.0, moq: 10, status: ProductStatus::Active },
    ProductSpec { sku: "HYD-3350", name: "Hydraulic Power Unit 5HP", category: "Hydraulics", brand: "Bosch Rexroth", stock: 12, unit_price: 4890.0, moq: 1, status: ProductStatus::Active },
];

fn products() -> Vec<Product> {
    let listed = ts("2024-11-01T08:00:00Z");
    PRODUCT_SPECS
        .iter()
        .map(|spec| Product {
            id: Uuid::new_v4(),
            created_at: listed,
            updated_at: listed,
            sku: spec.sku.to_string(),
            name: spec.name.to_string(),
            category: spec.category.to_string(),
            brand: spec.brand.to_string(),
            stock: spec.stock,
            stock_status: StockStatus::for_level(spec.stock),
            unit_price: spec.unit_price,
            moq: spec.moq,
            status: spec.status,
        })
        .collect()
}

/// Look a seeded product up by SKU; request line items reference them.
fn item(products: &[Product], sku: &str, qty: i64, requested_price: Option<f64>, comment: &str) -> RequestItem {
    let product = products
        .iter()
        .find(|p| p.sku == sku)
        .expect("seed item references a seeded SKU");
    RequestItem {
        product_id: product.id,
        product_name: product.name.clone(),
        sku: product.sku.clone(),
        qty,
        unit_price: product.unit_price,
        requested_price,
        comment: comment.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn request(
    reference: &str,
    company: &str,
    contact: &str,
    contact_email: &str,
    submitted_at: &str,
    status: RequestStatus,
    priority: Priority,
    items: Vec<RequestItem>,
    notes: &str,
) -> QuoteRequest {
    let submitted = ts(submitted_at);
    QuoteRequest {
        id: Uuid::new_v4(),
        created_at: submitted,
        updated_at: submitted,
        reference: reference.to_string(),
        company: company.to_string(),
        contact: contact.to_string(),
        contact_email: contact_email.to_string(),
        submitted_at: submitted,
        status,
        priority,
        items,
        notes: notes.to_string(),
        admin_note: None,
    }
}

fn requests(products: &[Product]) -> Vec<QuoteRequest> {
    vec![
        request(
            "RQ-2024-001", "Meridian Manufacturing", "Sarah Chen", "s.chen@meridianmfg.com",
            "2024-12-15T09:30:00Z", RequestStatus::Approved, Priority::High,
            vec![
                item(products, "ELC-6610", 3, Some(3200.0), "Volume pricing for Q1 rollout"),
                item(products, "ELC-4821", 50, Some(78.0), ""),
                item(products, "ELC-7790", 100, Some(34.0), "Annual contract pricing"),
                item(products, "PNE-7734", 20, None, ""),
            ],
            "Urgent requirement for new production line setup. Need delivery within 2 weeks.",
        ),
        request(
            "RQ-2024-002", "Atlas Industrial Solutions", "James Rivera", "j.rivera@atlasind.com",
            "2024-12-18T14:15:00Z", RequestStatus::InReview, Priority::Medium,
            vec![
                item(products, "HYD-3350", 2, Some(4600.0), "Replacing existing units"),
                item(products, "HYD-1190", 10, None, ""),
                item(products, "HYD-2240", 20, Some(45.0), "Recurring order"),
            ],
            "Replacement parts for hydraulic system overhaul in Plant B.",
        ),
        request(
            "RQ-2024-003", "Pinnacle Automation Group", "Emily Nakamura", "e.nakamura@pinnacleauto.com",
            "2024-12-20T11:00:00Z", RequestStatus::Submitted, Priority::Low,
            vec![
                item(products, "SAF-1122", 200, Some(10.5), "Annual bulk safety equipment order"),
                item(products, "PNE-8821", 15, None, ""),
            ],
            "Annual safety equipment refresh for all facilities.",
        ),
        request(
            "RQ-2024-004", "Vanguard Engineering Corp", "Robert Kim", "r.kim@vanguardeng.com",
            "2024-12-22T08:45:00Z", RequestStatus::Rejected, Priority::High,
            vec![
                item(products, "ELC-5502", 30, Some(950.0), "Need significant volume discount"),
                item(products, "ELC-6610", 5, Some(2800.0), ""),
            ],
            "Major automation project. Requested pricing is below our cost threshold.",
        ),
        request(
            "RQ-2024-005", "Cobalt Supply Chain", "Lisa Andersen", "l.andersen@cobaltsupply.com",
            "2024-12-28T16:20:00Z", RequestStatus::InReview, Priority::Urgent,
            vec![
                item(products, "FAS-3318", 500, Some(2.0), ""),
                item(products, "ELC-4821", 30, None, ""),
                item(products, "SAF-1122", 100, Some(11.0), ""),
                item(products, "ELC-7790", 50, Some(35.0), ""),
                item(products, "HYD-2240", 10, None, ""),
            ],
            "Urgent replenishment for warehouse stock. Expedited shipping required.",
        ),
        request(
            "RQ-2024-006", "Horizon Fabrication Ltd", "Michael Torres", "m.torres@horizonfab.com",
            "2025-01-02T10:00:00Z", RequestStatus::Draft, Priority::Medium,
            vec![
                item(products, "PNE-7734", 5, None, ""),
                item(products, "PNE-8821", 8, Some(175.0), ""),
            ],
            "",
        ),
    ]
}

fn comment(
    request_id: Uuid,
    author: &str,
    author_role: UserRole,
    content: &str,
    timestamp: &str,
) -> RequestComment {
    RequestComment {
        id: Uuid::new_v4(),
        request_id,
        author: author.to_string(),
        author_role,
        content: content.to_string(),
        timestamp: ts(timestamp),
    }
}

/// Discussion thread on the approved RQ-2024-001
fn comments(requests: &[QuoteRequest]) -> Vec<RequestComment> {
    let rq1 = requests
        .iter()
        .find(|r| r.reference == "RQ-2024-001")
        .expect("seed thread references a seeded request");
    vec![
        comment(
            rq1.id, "Sarah Chen", UserRole::Partner,
            "We need these items delivered to our Plant A facility by January 15th. Please confirm availability.",
            "2024-12-15T09:35:00Z",
        ),
        comment(
            rq1.id, "David Park", UserRole::Admin,
            "Confirmed availability for all items. The PLC units are in stock. We can meet the January 15th deadline with express shipping.",
            "2024-12-16T10:20:00Z",
        ),
        comment(
            rq1.id, "Sarah Chen", UserRole::Partner,
            "Excellent. Please proceed with the order. We accept the revised pricing on the relay modules.",
            "2024-12-16T14:00:00Z",
        ),
        comment(
            rq1.id, "David Park", UserRole::Admin,
            "Request approved. Order has been processed and shipping is being arranged. You will receive tracking details within 24 hours.",
            "2024-12-17T09:00:00Z",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn ticket(
    reference: &str,
    subject: &str,
    category: TicketCategory,
    status: TicketStatus,
    priority: TicketPriority,
    assignee: Option<&str>,
    created_at: &str,
    updated_at: &str,
    description: &str,
) -> Ticket {
    Ticket {
        id: Uuid::new_v4(),
        created_at: ts(created_at),
        updated_at: ts(updated_at),
        reference: reference.to_string(),
        subject: subject.to_string(),
        category,
        status,
        priority,
        assignee: assignee.map(str::to_string),
        description: description.to_string(),
    }
}

fn tickets() -> Vec<Ticket> {
    vec![
        ticket(
            "TK-4201", "Invoice discrepancy on order #ORD-8812",
            TicketCategory::Billing, TicketStatus::Open, TicketPriority::High,
            Some("David Park"), "2024-12-28T09:00:00Z", "2024-12-29T14:30:00Z",
            "The invoice total does not match the agreed pricing in our contract. Please review and issue a corrected invoice.",
        ),
        ticket(
            "TK-4202", "Damaged goods received - Hydraulic hoses",
            TicketCategory::Shipping, TicketStatus::InProgress, TicketPriority::High,
            Some("Maria Santos"), "2024-12-26T11:30:00Z", "2024-12-28T16:45:00Z",
            "Several hydraulic hoses in our last shipment were damaged during transit. Photos attached. Need replacement shipment.",
        ),
        ticket(
            "TK-4203", "Request API access for inventory integration",
            TicketCategory::Technical, TicketStatus::Open, TicketPriority::Medium,
            None, "2024-12-30T08:15:00Z", "2024-12-30T08:15:00Z",
            "We need API access to integrate your catalog with our ERP system. Please provide documentation and access credentials.",
        ),
        ticket(
            "TK-4204", "Update company billing address",
            TicketCategory::Account, TicketStatus::Resolved, TicketPriority::Low,
            Some("David Park"), "2024-12-20T10:00:00Z", "2024-12-22T09:00:00Z",
            "Please update our billing address to the new headquarters location.",
        ),
        ticket(
            "TK-4205", "Product specification mismatch - PLC Unit",
            TicketCategory::Product, TicketStatus::InProgress, TicketPriority::Medium,
            Some("Alex Novak"), "2024-12-24T14:00:00Z", "2024-12-27T11:20:00Z",
            "The PLC Controller delivered has firmware version 4.2 instead of the listed 4.5. Need firmware update or replacement.",
        ),
        ticket(
            "TK-4206", "Bulk order discount not applied",
            TicketCategory::Billing, TicketStatus::Closed, TicketPriority::Medium,
            Some("David Park"), "2024-12-10T09:30:00Z", "2024-12-15T17:00:00Z",
            "Our last bulk order of safety gloves did not include the agreed 15% volume discount.",
        ),
    ]
}

fn user(
    name: &str,
    email: &str,
    company: &str,
    role: UserRole,
    status: UserStatus,
    last_active: &str,
) -> User {
    let seen = ts(last_active);
    User {
        id: Uuid::new_v4(),
        created_at: ts("2024-10-01T09:00:00Z"),
        updated_at: seen,
        name: name.to_string(),
        email: email.to_string(),
        company: company.to_string(),
        role,
        status,
        last_active: seen,
    }
}

fn users() -> Vec<User> {
    vec![
        user("Sarah Chen", "s.chen@meridianmfg.com", "Meridian Manufacturing", UserRole::Partner, UserStatus::Active, "2025-01-03T08:30:00Z"),
        user("James Rivera", "j.rivera@atlasind.com", "Atlas Industrial Solutions", UserRole::Partner, UserStatus::Active, "2025-01-02T14:15:00Z"),
        user("Emily Nakamura", "e.nakamura@pinnacleauto.com", "Pinnacle Automation Group", UserRole::Partner, UserStatus::Active, "2024-12-30T11:00:00Z"),
        user("Robert Kim", "r.kim@vanguardeng.com", "Vanguard Engineering Corp", UserRole::Partner, UserStatus::Inactive, "2024-12-22T08:45:00Z"),
        user("Lisa Andersen", "l.andersen@cobaltsupply.com", "Cobalt Supply Chain", UserRole::Partner, UserStatus::Active, "2025-01-03T16:20:00Z"),
        user("Michael Torres", "m.torres@horizonfab.com", "Horizon Fabrication Ltd", UserRole::Partner, UserStatus::Pending, "2025-01-02T10:00:00Z"),
        user("David Park", "d.park@internal.com", "Internal", UserRole::Admin, UserStatus::Active, "2025-01-03T17:00:00Z"),
        user("Maria Santos", "m.santos@internal.com", "Internal", UserRole::Admin, UserStatus::Active, "2025-01-03T16:30:00Z"),
        user("Alex Novak", "a.novak@internal.com", "Internal", UserRole::Viewer, UserStatus::Active, "2025-01-01T12:00:00Z"),
    ]
}

fn activity(
    action: &str,
    detail: &str,
    actor: &str,
    kind: ActivityKind,
    timestamp: &str,
) -> ActivityEntry {
    ActivityEntry {
        id: Uuid::new_v4(),
        action: action.to_string(),
        detail: detail.to_string(),
        actor: actor.to_string(),
        kind,
        timestamp: ts(timestamp),
    }
}

fn activity_feed() -> ActivityFeed {
    let mut feed = ActivityFeed::new();
    // Oldest first; the feed serves newest first
    for entry in [
        activity("Request moved to review", "RQ-2024-002 from Atlas Industrial now in review", "Alex Novak", ActivityKind::Request, "2024-12-29T10:00:00Z"),
        activity("Catalog updated", "12 product prices updated for Q1 2025", "Maria Santos", ActivityKind::System, "2024-12-30T16:00:00Z"),
        activity("Ticket resolved", "TK-4204 - Company billing address updated", "David Park", ActivityKind::Ticket, "2025-01-01T09:00:00Z"),
        activity("Request rejected", "RQ-2024-004 from Vanguard Engineering - below cost threshold", "David Park", ActivityKind::Request, "2025-01-02T11:30:00Z"),
        activity("User invited", "Michael Torres from Horizon Fabrication Ltd invited to portal", "Maria Santos", ActivityKind::User, "2025-01-02T15:00:00Z"),
        activity("Request submitted", "RQ-2024-005 from Cobalt Supply Chain submitted for review", "Lisa Andersen", ActivityKind::Request, "2025-01-03T10:20:00Z"),
        activity("New ticket created", "TK-4201 - Invoice discrepancy on order #ORD-8812", "Sarah Chen", ActivityKind::Ticket, "2025-01-03T14:00:00Z"),
        activity("Request approved", "RQ-2024-001 from Meridian Manufacturing approved", "David Park", ActivityKind::Request, "2025-01-03T16:30:00Z"),
    ] {
        feed.record(entry);
    }
    feed
}

fn notification(
    title: &str,
    body: &str,
    kind: NotificationKind,
    read: bool,
    created_at: &str,
) -> Notification {
    let created = ts(created_at);
    Notification {
        id: Uuid::new_v4(),
        created_at: created,
        updated_at: created,
        title: title.to_string(),
        body: body.to_string(),
        kind,
        read,
    }
}

fn notifications() -> Vec<Notification> {
    vec![
        notification(
            "Catalog updated", "12 product prices updated for Q1 2025",
            NotificationKind::System, true, "2024-12-30T16:00:00Z",
        ),
        notification(
            "User invited", "Michael Torres from Horizon Fabrication Ltd invited to portal",
            NotificationKind::User, true, "2025-01-02T15:00:00Z",
        ),
        notification(
            "New ticket created", "TK-4201 - Invoice discrepancy on order #ORD-8812",
            NotificationKind::Ticket, false, "2025-01-03T14:00:00Z",
        ),
        notification(
            "Request approved", "RQ-2024-001 from Meridian Manufacturing approved",
            NotificationKind::Request, false, "2025-01-03T16:30:00Z",
        ),
    ]
}

/// Build the fully seeded store state
pub(crate) fn seeded_state() -> StoreState {
    let products = products();
    let requests = requests(&products);
    let comments = comments(&requests);
    StoreState {
        products,
        requests,
        comments,
        tickets: tickets(),
        users: users(),
        notifications: notifications(),
        activity: activity_feed(),
        // Seeded references run RQ-…-001 through 006 and TK-4201 through 4206
        next_request_seq: 7,
        next_ticket_seq: 4207,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape_matches_demo_dataset() {
        let state = seeded_state();
        assert_eq!(state.products.len(), 12);
        assert_eq!(state.requests.len(), 6);
        assert_eq!(state.tickets.len(), 6);
        assert_eq!(state.users.len(), 9);
        assert_eq!(state.activity.len(), 8);
        assert_eq!(state.notifications.len(), 4);
        assert_eq!(state.comments.len(), 4);
    }

    #[test]
    fn test_seed_comments_attach_to_approved_request() {
        let state = seeded_state();
        let rq1 = state
            .requests
            .iter()
            .find(|r| r.reference == "RQ-2024-001")
            .expect("seeded request");
        assert!(state.comments.iter().all(|c| c.request_id == rq1.id));
        assert_eq!(state.comments[0].author_role, UserRole::Partner);
        assert_eq!(state.comments[1].author, "David Park");
    }

    #[test]
    fn test_seed_stock_statuses_derive_from_levels() {
        let state = seeded_state();
        let by_sku = |sku: &str| {
            state
                .products
                .iter()
                .find(|p| p.sku == sku)
                .expect("seeded sku")
                .stock_status
        };
        assert_eq!(by_sku("ELC-4821"), StockStatus::InStock);
        assert_eq!(by_sku("PNE-7734"), StockStatus::LowStock);
        assert_eq!(by_sku("ELC-5502"), StockStatus::OutOfStock);
    }

    #[test]
    fn test_seed_request_items_reference_seeded_products() {
        let state = seeded_state();
        for request in &state.requests {
            assert!(!request.items.is_empty());
            for item in &request.items {
                assert!(state.products.iter().any(|p| p.id == item.product_id));
            }
        }
    }

    #[test]
    fn test_seed_request_totals_match_demo_values() {
        let state = seeded_state();
        let rq1 = state
            .requests
            .iter()
            .find(|r| r.reference == "RQ-2024-001")
            .expect("seeded request");
        // 3×3420 + 50×84.5 + 100×38 + 20×296 = 24205
        assert!((rq1.total() - 24_205.0).abs() < 1e-6);
        assert_eq!(rq1.item_count(), 4);
    }

    #[test]
    fn test_seed_activity_serves_newest_first() {
        let state = seeded_state();
        let recent = state.activity.recent(2);
        assert_eq!(recent[0].action, "Request approved");
        assert_eq!(recent[1].action, "New ticket created");
    }
}
