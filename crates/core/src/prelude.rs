//! KeepStudy prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    assessments::{AssessmentCenter, AssessmentError, AssessmentKind, LearningPlan},
    assistant::{AssistantError, CannedResponder, ChatMessage, ChatRole, Conversation, Responder},
    cart::{AddOutcome, CartItem, CartStore},
    catalog::{Catalog, CatalogError, Course, CourseFilter},
    checkout::{CheckoutError, PendingCheckout, checkout},
    community::{ChannelFeed, CommunityError},
    events::{ChangeEvent, Notifier, SubscriptionId},
    orders::{Order, OrderId, OrderStatus, OrderStore, PaymentMethod},
    payments::{InstantGateway, PaymentError, PaymentGateway, PaymentReceipt, PaymentRequest},
    prices::{PriceError, format_price, parse_price},
    routes::{Route, WorkspaceRoute},
    session::{SessionStore, User},
    storage::{KeyValueStore, MemoryStore, StorageError, StorageKey},
};
