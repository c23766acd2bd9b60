//! In-memory portal store
//!
//! Owns the record collections every list view queries and applies the
//! mutations the portal UI performs: the request review flow, the ticket
//! lifecycle, user management, catalog updates, and notification read
//! state. List accessors hand out immutable `Arc<[T]>` snapshots — the
//! collection reference a [`ListQueryEngine`] holds for its lifetime.
//!
//! Every mutation validates its input, applies the state change, appends
//! an [`ActivityEntry`], and logs through `tracing`.
//!
//! [`ListQueryEngine`]: crate::query::ListQueryEngine

mod seed;

use chrono::{Datelike, Utc};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;
use uuid::Uuid;

use crate::core::entity::Entity;
use crate::core::error::{EntityError, PortalResult};
use crate::core::events::{ActivityEntry, ActivityFeed, ActivityKind};
use crate::core::validation::{InviteForm, RequestForm, TicketForm};
use crate::entities::{
    Notification, NotificationKind, Priority, Product, QuoteRequest, RequestComment, RequestItem,
    RequestStatus, Ticket, TicketCategory, TicketPriority, User, UserRole, UserStatus,
};

pub(crate) struct StoreState {
    pub(crate) products: Vec<Product>,
    pub(crate) requests: Vec<QuoteRequest>,
    pub(crate) comments: Vec<RequestComment>,
    pub(crate) tickets: Vec<Ticket>,
    pub(crate) users: Vec<User>,
    pub(crate) notifications: Vec<Notification>,
    pub(crate) activity: ActivityFeed,
    pub(crate) next_request_seq: u32,
    pub(crate) next_ticket_seq: u32,
}

impl StoreState {
    fn empty() -> Self {
        Self {
            products: Vec::new(),
            requests: Vec::new(),
            comments: Vec::new(),
            tickets: Vec::new(),
            users: Vec::new(),
            notifications: Vec::new(),
            activity: ActivityFeed::new(),
            next_request_seq: 1,
            next_ticket_seq: 4001,
        }
    }
}

/// The in-memory mock data store behind every portal view.
///
/// Cloning is cheap and shares the underlying state, so the partner and
/// admin areas can hold the same store.
#[derive(Clone)]
pub struct PortalStore {
    state: Arc<RwLock<StoreState>>,
}

impl PortalStore {
    /// An empty store, for tests that build their own records
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::empty())),
        }
    }

    /// A store pre-loaded with the demo dataset
    pub fn seeded() -> Self {
        let store = Self {
            state: Arc::new(RwLock::new(seed::seeded_state())),
        };
        info!("portal store seeded with demo dataset");
        store
    }

    fn read(&self) -> PortalResult<RwLockReadGuard<'_, StoreState>> {
        self.state.read().map_err(|e| {
            EntityError::OperationFailed {
                entity_type: "portal-store".to_string(),
                operation: "acquire read lock".to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    fn write(&self) -> PortalResult<RwLockWriteGuard<'_, StoreState>> {
        self.state.write().map_err(|e| {
            EntityError::OperationFailed {
                entity_type: "portal-store".to_string(),
                operation: "acquire write lock".to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    // === Collection snapshots ===

    /// All products, in catalog order
    pub fn products(&self) -> PortalResult<Arc<[Product]>> {
        Ok(self.read()?.products.iter().cloned().collect())
    }

    /// Products partners may put on a request (active only)
    pub fn orderable_products(&self) -> PortalResult<Arc<[Product]>> {
        Ok(self
            .read()?
            .products
            .iter()
            .filter(|p| p.is_orderable())
            .cloned()
            .collect())
    }

    /// All quote requests, oldest first
    pub fn requests(&self) -> PortalResult<Arc<[QuoteRequest]>> {
        Ok(self.read()?.requests.iter().cloned().collect())
    }

    /// Quote requests submitted by one company (the partner area's view)
    pub fn requests_for_company(&self, company: &str) -> PortalResult<Arc<[QuoteRequest]>> {
        Ok(self
            .read()?
            .requests
            .iter()
            .filter(|r| r.company == company)
            .cloned()
            .collect())
    }

    /// All support tickets
    pub fn tickets(&self) -> PortalResult<Arc<[Ticket]>> {
        Ok(self.read()?.tickets.iter().cloned().collect())
    }

    /// All user accounts
    pub fn users(&self) -> PortalResult<Arc<[User]>> {
        Ok(self.read()?.users.iter().cloned().collect())
    }

    /// All notifications, oldest first
    pub fn notifications(&self) -> PortalResult<Arc<[Notification]>> {
        Ok(self.read()?.notifications.iter().cloned().collect())
    }

    /// The `n` most recent activity entries, newest first
    pub fn recent_activity(&self, n: usize) -> PortalResult<Vec<ActivityEntry>> {
        Ok(self.read()?.activity.recent(n))
    }

    // === Lookups ===

    pub fn get_product(&self, id: Uuid) -> PortalResult<Option<Product>> {
        Ok(self.read()?.products.iter().find(|p| p.id == id).cloned())
    }

    pub fn get_request(&self, id: Uuid) -> PortalResult<Option<QuoteRequest>> {
        Ok(self.read()?.requests.iter().find(|r| r.id == id).cloned())
    }

    pub fn get_ticket(&self, id: Uuid) -> PortalResult<Option<Ticket>> {
        Ok(self.read()?.tickets.iter().find(|t| t.id == id).cloned())
    }

    pub fn get_user(&self, id: Uuid) -> PortalResult<Option<User>> {
        Ok(self.read()?.users.iter().find(|u| u.id == id).cloned())
    }

    // === Quote request flow ===

    /// Validate a request form and submit it into the review queue
    pub fn submit_request(&self, form: &RequestForm, actor: &str) -> PortalResult<QuoteRequest> {
        self.create_request(form, actor, RequestStatus::Submitted)
    }

    /// Validate a request form and keep it as a draft
    pub fn save_draft(&self, form: &RequestForm, actor: &str) -> PortalResult<QuoteRequest> {
        self.create_request(form, actor, RequestStatus::Draft)
    }

    fn create_request(
        &self,
        form: &RequestForm,
        actor: &str,
        status: RequestStatus,
    ) -> PortalResult<QuoteRequest> {
        form.validate()?;

        let priority = form
            .priority
            .parse::<Priority>()
            .unwrap_or(Priority::Medium);

        let mut state = self.write()?;

        let mut items = Vec::with_capacity(form.items.len());
        for form_item in &form.items {
            // validate() already guaranteed product_id is present
            let product_id = form_item.product_id.ok_or_else(|| {
                EntityError::OperationFailed {
                    entity_type: QuoteRequest::resource_name_singular().to_string(),
                    operation: "create".to_string(),
                    message: "form item missing product".to_string(),
                }
            })?;
            let product = state
                .products
                .iter()
                .find(|p| p.id == product_id)
                .ok_or(EntityError::NotFound {
                    entity_type: Product::resource_name_singular().to_string(),
                    id: product_id,
                })?;
            items.push(RequestItem {
                product_id: product.id,
                product_name: product.name.clone(),
                sku: product.sku.clone(),
                qty: form_item.qty,
                unit_price: product.unit_price,
                requested_price: form_item.requested_price,
                comment: form_item.comment.clone(),
            });
        }

        let reference = format!(
            "RQ-{}-{:03}",
            Utc::now().year(),
            state.next_request_seq
        );
        state.next_request_seq += 1;

        let request = QuoteRequest::new(
            reference,
            form.company.trim(),
            form.contact_name.trim(),
            form.contact_email.trim().to_lowercase(),
            status,
            priority,
            items,
            form.notes.clone(),
        );

        let (action, kind) = match status {
            RequestStatus::Draft => ("Draft saved", ActivityKind::Request),
            _ => ("Request submitted", ActivityKind::Request),
        };
        let detail = format!("{} from {}", request.reference, request.company);
        state
            .activity
            .record(ActivityEntry::new(action, detail.as_str(), actor, kind));
        if status == RequestStatus::Submitted {
            state.notifications.push(Notification::new(
                "Request submitted",
                format!("{} submitted for review", detail),
                NotificationKind::Request,
            ));
        }

        info!(
            reference = %request.reference,
            company = %request.company,
            status = %request.status,
            "quote request created"
        );

        state.requests.push(request.clone());
        Ok(request)
    }

    /// Approve a request sitting in the review queue
    pub fn approve_request(
        &self,
        id: Uuid,
        admin_note: Option<String>,
        actor: &str,
    ) -> PortalResult<QuoteRequest> {
        self.review_request(id, actor, "Request approved", move |request| {
            request.approve(admin_note.clone())
        })
    }

    /// Reject a request sitting in the review queue
    pub fn reject_request(
        &self,
        id: Uuid,
        admin_note: Option<String>,
        actor: &str,
    ) -> PortalResult<QuoteRequest> {
        self.review_request(id, actor, "Request rejected", move |request| {
            request.reject(admin_note.clone())
        })
    }

    /// Send a request back to the partner with requested changes
    pub fn request_changes(
        &self,
        id: Uuid,
        admin_note: Option<String>,
        actor: &str,
    ) -> PortalResult<QuoteRequest> {
        self.review_request(id, actor, "Changes requested", move |request| {
            request.request_changes(admin_note.clone())
        })
    }

    fn review_request<F>(&self, id: Uuid, actor: &str, action: &str, apply: F) -> PortalResult<QuoteRequest>
    where
        F: Fn(&mut QuoteRequest) -> Result<(), EntityError>,
    {
        let mut state = self.write()?;
        let request = state
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(EntityError::NotFound {
                entity_type: QuoteRequest::resource_name_singular().to_string(),
                id,
            })?;

        apply(request)?;
        let snapshot = request.clone();

        let detail = format!("{} from {}", snapshot.reference, snapshot.company);
        state.activity.record(ActivityEntry::new(
            action,
            detail.as_str(),
            actor,
            ActivityKind::Request,
        ));
        state.notifications.push(Notification::new(
            action,
            detail,
            NotificationKind::Request,
        ));

        info!(
            reference = %snapshot.reference,
            status = %snapshot.status,
            actor,
            "request reviewed"
        );
        Ok(snapshot)
    }

    /// Clone an existing request into a fresh draft with a new reference.
    /// Line items are re-priced against the current catalog.
    pub fn duplicate_request(&self, id: Uuid, actor: &str) -> PortalResult<QuoteRequest> {
        let mut state = self.write()?;
        let source = state
            .requests
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(EntityError::NotFound {
                entity_type: QuoteRequest::resource_name_singular().to_string(),
                id,
            })?;

        let items = source
            .items
            .iter()
            .map(|item| {
                let current_price = state
                    .products
                    .iter()
                    .find(|p| p.id == item.product_id)
                    .map(|p| p.unit_price)
                    .unwrap_or(item.unit_price);
                RequestItem {
                    unit_price: current_price,
                    ..item.clone()
                }
            })
            .collect();

        let reference = format!("RQ-{}-{:03}", Utc::now().year(), state.next_request_seq);
        state.next_request_seq += 1;

        let draft = QuoteRequest::new(
            reference,
            source.company.clone(),
            source.contact.clone(),
            source.contact_email.clone(),
            RequestStatus::Draft,
            source.priority,
            items,
            source.notes.clone(),
        );

        state.activity.record(ActivityEntry::new(
            "Request duplicated",
            format!("{} duplicated as {}", source.reference, draft.reference),
            actor,
            ActivityKind::Request,
        ));
        info!(source = %source.reference, draft = %draft.reference, "request duplicated");

        state.requests.push(draft.clone());
        Ok(draft)
    }

    /// Cancel a request that has not been decided yet, removing it and
    /// its discussion thread
    pub fn cancel_request(&self, id: Uuid, actor: &str) -> PortalResult<()> {
        let mut state = self.write()?;
        let position = state
            .requests
            .iter()
            .position(|r| r.id == id)
            .ok_or(EntityError::NotFound {
                entity_type: QuoteRequest::resource_name_singular().to_string(),
                id,
            })?;

        let request = &state.requests[position];
        if matches!(
            request.status,
            RequestStatus::Approved | RequestStatus::Rejected
        ) {
            return Err(EntityError::InvalidTransition {
                entity_type: QuoteRequest::resource_name_singular().to_string(),
                id,
                from: request.status.to_string(),
                action: "cancel".to_string(),
            }
            .into());
        }

        let removed = state.requests.remove(position);
        state.comments.retain(|c| c.request_id != id);
        state.activity.record(ActivityEntry::new(
            "Request cancelled",
            format!("{} from {} cancelled", removed.reference, removed.company),
            actor,
            ActivityKind::Request,
        ));
        info!(reference = %removed.reference, actor, "request cancelled");
        Ok(())
    }

    /// The discussion thread for one request, oldest first
    pub fn comments_for_request(&self, request_id: Uuid) -> PortalResult<Vec<RequestComment>> {
        Ok(self
            .read()?
            .comments
            .iter()
            .filter(|c| c.request_id == request_id)
            .cloned()
            .collect())
    }

    /// Add a comment to a request's discussion thread
    pub fn add_comment(
        &self,
        request_id: Uuid,
        author: &str,
        author_role: UserRole,
        content: &str,
    ) -> PortalResult<RequestComment> {
        let mut state = self.write()?;
        if !state.requests.iter().any(|r| r.id == request_id) {
            return Err(EntityError::NotFound {
                entity_type: QuoteRequest::resource_name_singular().to_string(),
                id: request_id,
            }
            .into());
        }

        let comment = RequestComment::new(request_id, author, author_role, content);
        state.comments.push(comment.clone());
        Ok(comment)
    }

    // === Ticket flow ===

    /// Validate a ticket form and open the ticket
    pub fn create_ticket(&self, form: &TicketForm, actor: &str) -> PortalResult<Ticket> {
        form.validate()?;

        let category = form
            .category
            .parse::<TicketCategory>()
            .unwrap_or(TicketCategory::Account);
        let priority = form
            .priority
            .parse::<TicketPriority>()
            .unwrap_or(TicketPriority::Medium);

        let mut state = self.write()?;
        let reference = format!("TK-{}", state.next_ticket_seq);
        state.next_ticket_seq += 1;

        let ticket = Ticket::new(
            reference,
            form.subject.trim(),
            category,
            priority,
            form.description.trim(),
        );

        let detail = format!("{} - {}", ticket.reference, ticket.subject);
        state.activity.record(ActivityEntry::new(
            "New ticket created",
            detail.as_str(),
            actor,
            ActivityKind::Ticket,
        ));
        state.notifications.push(Notification::new(
            "New ticket created",
            detail,
            NotificationKind::Ticket,
        ));

        info!(reference = %ticket.reference, category = %ticket.category, "ticket created");

        state.tickets.push(ticket.clone());
        Ok(ticket)
    }

    /// Assign a ticket to a support agent
    pub fn assign_ticket(&self, id: Uuid, agent: &str, actor: &str) -> PortalResult<Ticket> {
        self.update_ticket(id, actor, "Ticket assigned", |ticket| {
            ticket.assign(agent);
            Ok(())
        })
    }

    /// Move an open ticket into progress
    pub fn start_ticket_progress(&self, id: Uuid, actor: &str) -> PortalResult<Ticket> {
        self.update_ticket(id, actor, "Ticket in progress", Ticket::start_progress)
    }

    /// Resolve a ticket
    pub fn resolve_ticket(&self, id: Uuid, actor: &str) -> PortalResult<Ticket> {
        self.update_ticket(id, actor, "Ticket resolved", Ticket::resolve)
    }

    /// Close a ticket
    pub fn close_ticket(&self, id: Uuid, actor: &str) -> PortalResult<Ticket> {
        self.update_ticket(id, actor, "Ticket closed", Ticket::close)
    }

    /// Reopen a resolved or closed ticket
    pub fn reopen_ticket(&self, id: Uuid, actor: &str) -> PortalResult<Ticket> {
        self.update_ticket(id, actor, "Ticket reopened", Ticket::reopen)
    }

    fn update_ticket<F>(&self, id: Uuid, actor: &str, action: &str, apply: F) -> PortalResult<Ticket>
    where
        F: Fn(&mut Ticket) -> Result<(), EntityError>,
    {
        let mut state = self.write()?;
        let ticket = state
            .tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(EntityError::NotFound {
                entity_type: Ticket::resource_name_singular().to_string(),
                id,
            })?;

        apply(ticket)?;
        let snapshot = ticket.clone();

        let detail = format!("{} - {}", snapshot.reference, snapshot.subject);
        state
            .activity
            .record(ActivityEntry::new(action, detail, actor, ActivityKind::Ticket));

        info!(reference = %snapshot.reference, status = %snapshot.status, actor, "ticket updated");
        Ok(snapshot)
    }

    // === User management ===

    /// Validate an invite form and create the pending account
    pub fn invite_user(&self, form: &InviteForm, actor: &str) -> PortalResult<User> {
        form.validate()?;

        let role = form.role.parse::<UserRole>().unwrap_or(UserRole::Partner);
        let email = form.email.trim().to_lowercase();
        // Until the invite is accepted the account displays its email
        // local part as the name
        let name = email.split('@').next().unwrap_or(&email).to_string();

        let mut state = self.write()?;
        let user = User::invited(name, email, form.company.trim(), role);

        let detail = format!("{} from {} invited to portal", user.email, user.company);
        state.activity.record(ActivityEntry::new(
            "User invited",
            detail.as_str(),
            actor,
            ActivityKind::User,
        ));
        state.notifications.push(Notification::new(
            "User invited",
            detail,
            NotificationKind::User,
        ));

        info!(email = %user.email, role = %user.role, "user invited");

        state.users.push(user.clone());
        Ok(user)
    }

    /// Re-send the invitation for a pending account
    pub fn resend_invite(&self, id: Uuid, actor: &str) -> PortalResult<User> {
        let mut state = self.write()?;
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(EntityError::NotFound {
                entity_type: User::resource_name_singular().to_string(),
                id,
            })?;

        if user.status != UserStatus::Pending {
            return Err(EntityError::InvalidTransition {
                entity_type: User::resource_name_singular().to_string(),
                id,
                from: user.status.to_string(),
                action: "resend invite to".to_string(),
            }
            .into());
        }

        user.touch();
        let snapshot = user.clone();
        state.activity.record(ActivityEntry::new(
            "Invite resent",
            format!("Invitation re-sent to {}", snapshot.email),
            actor,
            ActivityKind::User,
        ));
        info!(email = %snapshot.email, "invite resent");
        Ok(snapshot)
    }

    /// Accept a pending invitation, activating the account
    pub fn accept_invite(&self, id: Uuid, display_name: &str) -> PortalResult<User> {
        let mut state = self.write()?;
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(EntityError::NotFound {
                entity_type: User::resource_name_singular().to_string(),
                id,
            })?;

        user.activate()?;
        user.name = display_name.to_string();
        user.mark_active_now();
        let snapshot = user.clone();

        state.activity.record(ActivityEntry::new(
            "User joined",
            format!("{} from {} joined the portal", snapshot.name, snapshot.company),
            snapshot.name.clone(),
            ActivityKind::User,
        ));
        Ok(snapshot)
    }

    /// Disable an account
    pub fn disable_user(&self, id: Uuid, actor: &str) -> PortalResult<User> {
        let mut state = self.write()?;
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(EntityError::NotFound {
                entity_type: User::resource_name_singular().to_string(),
                id,
            })?;

        user.disable()?;
        let snapshot = user.clone();

        state.activity.record(ActivityEntry::new(
            "User disabled",
            format!("{} ({}) disabled", snapshot.name, snapshot.email),
            actor,
            ActivityKind::User,
        ));
        info!(email = %snapshot.email, actor, "user disabled");
        Ok(snapshot)
    }

    /// Change an account's role
    pub fn set_user_role(&self, id: Uuid, role: UserRole, actor: &str) -> PortalResult<User> {
        let mut state = self.write()?;
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(EntityError::NotFound {
                entity_type: User::resource_name_singular().to_string(),
                id,
            })?;

        user.set_role(role);
        let snapshot = user.clone();

        state.activity.record(ActivityEntry::new(
            "Role changed",
            format!("{} is now {}", snapshot.name, snapshot.role),
            actor,
            ActivityKind::User,
        ));
        Ok(snapshot)
    }

    // === Catalog management ===

    /// Update a product's stock level, recomputing its availability
    pub fn set_product_stock(&self, id: Uuid, stock: i64, actor: &str) -> PortalResult<Product> {
        self.update_product(id, actor, move |product| product.set_stock(stock))
    }

    /// Update a product's unit price
    pub fn set_product_price(&self, id: Uuid, price: f64, actor: &str) -> PortalResult<Product> {
        self.update_product(id, actor, move |product| product.set_unit_price(price))
    }

    fn update_product<F>(&self, id: Uuid, actor: &str, apply: F) -> PortalResult<Product>
    where
        F: Fn(&mut Product),
    {
        let mut state = self.write()?;
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(EntityError::NotFound {
                entity_type: Product::resource_name_singular().to_string(),
                id,
            })?;

        apply(product);
        let snapshot = product.clone();

        state.activity.record(ActivityEntry::new(
            "Catalog updated",
            format!("{} ({}) updated", snapshot.name, snapshot.sku),
            actor,
            ActivityKind::System,
        ));
        info!(sku = %snapshot.sku, "product updated");
        Ok(snapshot)
    }

    // === Notifications ===

    /// Flip one notification between read and unread
    pub fn toggle_notification_read(&self, id: Uuid) -> PortalResult<Notification> {
        let mut state = self.write()?;
        let notification = state
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(EntityError::NotFound {
                entity_type: Notification::resource_name_singular().to_string(),
                id,
            })?;

        notification.toggle_read();
        Ok(notification.clone())
    }

    /// Mark every notification read
    pub fn mark_all_notifications_read(&self) -> PortalResult<usize> {
        let mut state = self.write()?;
        let mut marked = 0;
        for notification in &mut state.notifications {
            if !notification.read {
                notification.mark_read();
                marked += 1;
            }
        }
        Ok(marked)
    }

    /// How many notifications are unread (the topbar badge)
    pub fn unread_notifications(&self) -> PortalResult<usize> {
        Ok(self.read()?.notifications.iter().filter(|n| !n.read).count())
    }
}

impl Default for PortalStore {
    fn default() -> Self {
        Self::new()
    }
}
