//! Customer aggregate implementation.

use events::DomainEvent;

use super::{Address, CustomerAddressChanged, CustomerCreated, CustomerError};
use crate::aggregate::AggregateRoot;
use crate::value_objects::CustomerId;

/// Customer aggregate root.
///
/// A customer starts inactive and without an address; it can only be
/// activated once an address is set.
#[derive(Debug, Clone)]
pub struct Customer {
    id: CustomerId,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u64,
    events: Vec<DomainEvent>,
}

impl Customer {
    /// Creates a customer and records a `CustomerCreatedEvent`.
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>) -> Result<Self, CustomerError> {
        let mut customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
            events: Vec::new(),
        };
        customer.validate()?;

        let event = DomainEvent::from_payload(&CustomerCreated {
            customer_id: customer.id.clone(),
            name: customer.name.clone(),
        })?;
        customer.events.push(event);

        Ok(customer)
    }

    /// Rebuilds a customer from stored state without recording events.
    pub fn restore(
        id: CustomerId,
        name: String,
        address: Option<Address>,
        active: bool,
        reward_points: u64,
    ) -> Result<Self, CustomerError> {
        let customer = Self {
            id,
            name,
            address,
            active,
            reward_points,
            events: Vec::new(),
        };
        customer.validate()?;
        if customer.active && customer.address.is_none() {
            return Err(CustomerError::AddressRequiredToActivate);
        }
        Ok(customer)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.id.is_blank() {
            return Err(CustomerError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(CustomerError::NameRequired);
        }
        Ok(())
    }
}

// Query methods
impl Customer {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }
}

// Mutations
impl Customer {
    /// Renames the customer. The name must not be blank.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    /// Replaces the address and records a `CustomerAddressChangedEvent`.
    pub fn change_address(&mut self, address: Address) -> Result<(), CustomerError> {
        let event = DomainEvent::from_payload(&CustomerAddressChanged {
            customer_id: self.id.clone(),
            name: self.name.clone(),
            address: address.clone(),
        })?;
        self.address = Some(address);
        self.events.push(event);
        Ok(())
    }

    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequiredToActivate);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Credits reward points, clamping at `u64::MAX`.
    pub fn add_reward_points(&mut self, points: u64) {
        self.reward_points = self.reward_points.saturating_add(points);
    }
}

impl AggregateRoot for Customer {
    type Id = CustomerId;

    fn aggregate_type() -> &'static str {
        "Customer"
    }

    fn id(&self) -> &CustomerId {
        &self.id
    }

    fn pending_events(&self) -> &[DomainEvent] {
        &self.events
    }

    fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Compares observable state; pending events are ignored.
impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.address == other.address
            && self.active == other.active
            && self.reward_points == other.reward_points
    }
}

impl Eq for Customer {}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address::new("Wilkie Way", 4290, "94306", "Palo Alto, CA").unwrap()
    }

    #[test]
    fn test_new_customer_records_created_event() {
        let customer = Customer::new("123", "John Doe").unwrap();

        assert_eq!(customer.id().as_str(), "123");
        assert_eq!(customer.name(), "John Doe");
        assert!(!customer.is_active());
        assert!(customer.address().is_none());

        let events = customer.pending_events();
        assert_eq!(events.len(), 1);
        let payload: CustomerCreated = events[0].payload_as().unwrap();
        assert_eq!(payload.customer_id, CustomerId::from("123"));
        assert_eq!(payload.name, "John Doe");
    }

    #[test]
    fn test_blank_id_or_name_rejected() {
        assert!(matches!(
            Customer::new("", "John"),
            Err(CustomerError::IdRequired)
        ));
        assert!(matches!(
            Customer::new("123", " "),
            Err(CustomerError::NameRequired)
        ));
    }

    #[test]
    fn test_change_name() {
        let mut customer = Customer::new("123", "John").unwrap();
        customer.change_name("Jane").unwrap();
        assert_eq!(customer.name(), "Jane");

        assert!(matches!(
            customer.change_name(""),
            Err(CustomerError::NameRequired)
        ));
        assert_eq!(customer.name(), "Jane");
    }

    #[test]
    fn test_change_address_records_event() {
        let mut customer = Customer::new("123", "John").unwrap();
        customer.take_events();

        customer.change_address(address()).unwrap();

        assert_eq!(customer.address(), Some(&address()));
        let events = customer.take_events();
        assert_eq!(events.len(), 1);
        let payload: CustomerAddressChanged = events[0].payload_as().unwrap();
        assert_eq!(payload.address, address());
    }

    #[test]
    fn test_activate_requires_address() {
        let mut customer = Customer::new("123", "John").unwrap();
        assert!(matches!(
            customer.activate(),
            Err(CustomerError::AddressRequiredToActivate)
        ));

        customer.change_address(address()).unwrap();
        customer.activate().unwrap();
        assert!(customer.is_active());

        customer.deactivate();
        assert!(!customer.is_active());
    }

    #[test]
    fn test_reward_points_accumulate() {
        let mut customer = Customer::new("123", "John").unwrap();
        assert_eq!(customer.reward_points(), 0);

        customer.add_reward_points(10);
        customer.add_reward_points(5);
        assert_eq!(customer.reward_points(), 15);
    }

    #[test]
    fn test_reward_points_clamp_at_max() {
        let mut customer = Customer::new("123", "John").unwrap();

        customer.add_reward_points(u64::MAX);
        customer.add_reward_points(1);

        assert_eq!(customer.reward_points(), u64::MAX);
    }

    #[test]
    fn test_restore_records_no_events() {
        let customer = Customer::restore(
            CustomerId::from("123"),
            "John".to_string(),
            Some(address()),
            true,
            7,
        )
        .unwrap();

        assert!(customer.pending_events().is_empty());
        assert!(customer.is_active());
        assert_eq!(customer.reward_points(), 7);
    }

    #[test]
    fn test_restore_rejects_active_without_address() {
        let result = Customer::restore(CustomerId::from("123"), "John".to_string(), None, true, 0);
        assert!(matches!(
            result,
            Err(CustomerError::AddressRequiredToActivate)
        ));
    }

    #[test]
    fn test_equality_ignores_pending_events() {
        let mut created = Customer::new("123", "John").unwrap();
        let restored =
            Customer::restore(CustomerId::from("123"), "John".to_string(), None, false, 0).unwrap();
        assert_eq!(created, restored);

        created.take_events();
        assert_eq!(created, restored);
    }
}
