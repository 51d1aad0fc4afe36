//! Synthetic order data set.
//!
//! Fifty rows generated from a seeded PRNG so every build of the app shows
//! the same data. The generator draws, per row and in this order: user,
//! project, address, date label, status. Changing the draw order or the seed
//! changes the whole data set.

use super::{OrderRecord, OrderStatus, OrderUser, DATE_LABELS};
use once_cell::sync::Lazy;

/// Number of rows in the base set: five pages of ten.
pub const ROW_COUNT: usize = 50;

/// The immutable base record set. Built once, never mutated.
pub static BASE_ROWS: Lazy<Vec<OrderRecord>> = Lazy::new(build_rows);

/// mulberry32, a small 32-bit PRNG with good distribution for display data.
/// Yields floats in `[0, 1)`.
struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }

    /// Uniform index into a slice of length `len`.
    fn index(&mut self, len: usize) -> usize {
        (self.next() * len as f64) as usize
    }
}

/// Builds the synthetic rows. Deterministic: seed 42.
pub fn build_rows() -> Vec<OrderRecord> {
    let users: [(&str, &str); 5] = [
        ("Natali Craig", "/static/contacts/natali.png"),
        ("Kate Morrison", "/static/contacts/kate.png"),
        ("Drew Cano", "/static/contacts/drew.png"),
        ("Orlando Diggs", "/static/contacts/orlando.png"),
        ("Andi Lane", "/static/contacts/andi.png"),
    ];
    let projects = [
        "Landing Page",
        "CRM Admin pages",
        "Client Project",
        "Admin Dashboard",
        "App Landing Page",
    ];
    let addresses = [
        "Meadow Lane Oakland",
        "Larry San Francisco",
        "Bagwell Avenue Ocala",
        "Washburn Baton Rouge",
        "Nest Lane Olivette",
    ];

    let mut rng = Mulberry32::new(42);

    (0..ROW_COUNT)
        .map(|i| {
            let (name, avatar) = users[rng.index(users.len())];
            let project = projects[rng.index(projects.len())];
            let address = addresses[rng.index(addresses.len())];
            let date_label = DATE_LABELS[rng.index(DATE_LABELS.len())];
            let status = OrderStatus::ALL[rng.index(OrderStatus::ALL.len())];

            OrderRecord {
                uid: i as u32,
                id: format!("#CM{:04}", 9801 + i),
                user: OrderUser {
                    name: name.to_string(),
                    avatar: avatar.to_string(),
                },
                project: project.to_string(),
                address: address.to_string(),
                date_label: date_label.to_string(),
                status,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_deterministic() {
        assert_eq!(build_rows(), build_rows());
    }

    #[test]
    fn base_set_has_fifty_rows_with_sequential_uids() {
        let rows = build_rows();
        assert_eq!(rows.len(), ROW_COUNT);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.uid, i as u32);
        }
    }

    #[test]
    fn order_codes_run_from_9801() {
        let rows = build_rows();
        assert_eq!(rows[0].id, "#CM9801");
        assert_eq!(rows[49].id, "#CM9850");
    }

    #[test]
    fn every_field_comes_from_its_pool() {
        let rows = build_rows();
        for row in &rows {
            assert!(DATE_LABELS.contains(&row.date_label.as_str()));
            assert!(OrderStatus::ALL.contains(&row.status));
            assert!(row.user.avatar.starts_with("/static/contacts/"));
        }
    }

    #[test]
    fn prng_yields_unit_interval_values() {
        let mut rng = Mulberry32::new(42);
        for _ in 0..1_000 {
            let v = rng.next();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
