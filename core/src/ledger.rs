//! Registration ledger: store and wait-list membership.
//!
//! The maps are owned by the caller and passed in by handle. Insertion
//! is keyed on the derived identity, so registering the same person
//! any number of times leaves exactly one entry.

use crate::customer::{Customer, CustomerMap};

/// Insert or overwrite the customer under its derived identity.
pub fn register_customer(customer: &Customer, customer_map: &mut CustomerMap) {
    customer_map.insert(customer.id(), customer.clone());
}

/// Wait-list registration. Same semantics as [`register_customer`],
/// against whichever map the caller designates as the wait list.
pub fn register_wait_list_customer(customer: &Customer, wait_list_map: &mut CustomerMap) {
    wait_list_map.insert(customer.id(), customer.clone());
}

/// True iff the customer's identity is already present in the map.
pub fn is_customer_registered(customer: &Customer, customer_map: &CustomerMap) -> bool {
    customer_map.contains_key(&customer.id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_grants_membership() {
        let customer = Customer::new("Emily", "Tan", "1123345678");
        let mut map = CustomerMap::new();

        assert!(!is_customer_registered(&customer, &map));
        register_customer(&customer, &mut map);
        assert!(is_customer_registered(&customer, &map));
    }

    #[test]
    fn repeated_registration_keeps_one_entry() {
        let customer = Customer::new("Joe", "Smith", "1453345678");
        let mut map = CustomerMap::new();

        register_customer(&customer, &mut map);
        register_customer(&customer, &mut map);
        register_customer(&customer, &mut map);
        assert_eq!(map.len(), 1, "Identical registrations must collapse");
    }

    #[test]
    fn wait_list_membership_is_independent() {
        let customer = Customer::new("Emily", "Tan", "1123345678");
        let mut store = CustomerMap::new();
        let mut wait_list = CustomerMap::new();

        register_wait_list_customer(&customer, &mut wait_list);
        assert!(is_customer_registered(&customer, &wait_list));
        assert!(
            !is_customer_registered(&customer, &store),
            "Wait-list registration must not touch the store map"
        );

        register_customer(&customer, &mut store);
        assert!(is_customer_registered(&customer, &store));
    }

    #[test]
    fn membership_follows_identity_not_instance() {
        let first_visit = Customer::new("Emily", "Tan", "1123345678");
        let rebuilt = Customer::new("Emily", "Tan", "1123345678");
        let mut map = CustomerMap::new();

        register_customer(&first_visit, &mut map);
        assert!(
            is_customer_registered(&rebuilt, &map),
            "A separately built record with equal fields is the same person"
        );
    }
}
