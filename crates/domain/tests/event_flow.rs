//! Aggregates publishing their events through a dispatcher.

use std::sync::{Arc, Mutex};

use domain::{
    Address, AggregateRoot, CustomerAddressChanged, CustomerCreated, CustomerFactory,
    DomainError, LogWhenCustomerAddressIsChanged, LogWhenCustomerIsCreated, Money,
    OrderCreated, ProductCreated, ProductFactory, SendEmailWhenProductIsCreated, publish,
};
use events::{DomainEvent, EventDispatcher, EventHandler, EventPayload, HandlerResult};

/// Records the name of every event it sees.
#[derive(Default)]
struct Journal {
    seen: Mutex<Vec<String>>,
}

impl Journal {
    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl EventHandler for Journal {
    fn handle(&self, event: &DomainEvent) -> HandlerResult {
        self.seen.lock().unwrap().push(event.event_name().to_string());
        Ok(())
    }
}

#[test]
fn customer_events_reach_their_handlers_in_order() {
    let journal = Arc::new(Journal::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(
        CustomerCreated::EVENT_NAME,
        Arc::new(LogWhenCustomerIsCreated::first()),
    );
    dispatcher.register(
        CustomerCreated::EVENT_NAME,
        Arc::new(LogWhenCustomerIsCreated::second()),
    );
    dispatcher.register(CustomerCreated::EVENT_NAME, journal.clone());
    dispatcher.register(
        CustomerAddressChanged::EVENT_NAME,
        Arc::new(LogWhenCustomerAddressIsChanged),
    );
    dispatcher.register(CustomerAddressChanged::EVENT_NAME, journal.clone());

    let address = Address::new("Street 1", 1, "85503412", "Pato Branco").unwrap();
    let mut customer = CustomerFactory::create_with_address("John", address).unwrap();

    let published = publish(&mut customer, &dispatcher).unwrap();

    assert_eq!(published, 2);
    assert_eq!(
        journal.seen(),
        vec!["CustomerCreatedEvent", "CustomerAddressChangedEvent"]
    );
    assert!(customer.pending_events().is_empty());
}

#[test]
fn product_created_notifies_email_handler() {
    let journal = Arc::new(Journal::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(
        ProductCreated::EVENT_NAME,
        Arc::new(SendEmailWhenProductIsCreated::new("shop@example.com")),
    );
    dispatcher.register(ProductCreated::EVENT_NAME, journal.clone());

    let mut product = ProductFactory::create("Product 1", Money::from_cents(1000)).unwrap();
    publish(&mut product, &dispatcher).unwrap();

    assert_eq!(journal.seen(), vec!["ProductCreatedEvent"]);
}

#[test]
fn unheard_events_are_drained_silently() {
    let dispatcher = EventDispatcher::new();
    let mut order = domain::OrderFactory::create(domain::OrderProps {
        id: "329".into(),
        customer_id: "123".into(),
        items: vec![domain::OrderItemProps {
            id: "247".into(),
            name: "Order Item 1".to_string(),
            product_id: "23".into(),
            quantity: 1,
            price: Money::from_cents(25999),
        }],
    })
    .unwrap();

    assert_eq!(
        order.pending_events()[0].event_name(),
        OrderCreated::EVENT_NAME
    );
    assert_eq!(publish(&mut order, &dispatcher).unwrap(), 1);
    assert!(order.pending_events().is_empty());
}

#[test]
fn handler_failure_surfaces_as_domain_error() {
    struct Refuse;

    impl EventHandler for Refuse {
        fn handle(&self, _event: &DomainEvent) -> HandlerResult {
            Err("refused".into())
        }
    }

    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(ProductCreated::EVENT_NAME, Arc::new(Refuse));

    let mut product = ProductFactory::create("Product 1", Money::from_cents(1000)).unwrap();
    let err: DomainError = publish(&mut product, &dispatcher).unwrap_err().into();

    assert!(matches!(err, DomainError::Dispatch(_)));
}
