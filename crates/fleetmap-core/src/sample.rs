//! Built-in fallback dataset used when the source documents cannot be
//! loaded. Matches the fleet's three reference terminals and a handful of
//! their destinations.

use crate::record::{Position, ShippingLocation, Terminal};

pub fn terminals() -> Vec<Terminal> {
    vec![
        Terminal {
            id: "1".to_string(),
            name: "Smyrna".to_string(),
            terminal_number: "95".to_string(),
            address: "631 Enon Springs Road East".to_string(),
            city: "Smyrna".to_string(),
            state: "TN".to_string(),
            zip: "37167".to_string(),
            phone: "615-459-7393".to_string(),
            manager: "Wendy Ryan".to_string(),
            drivers: 8,
            shop: 4,
            other: 2,
            total: 14,
            opened: "06/08/05".to_string(),
            shop_bays: "6 Bay Full Service Repair Facility".to_string(),
            facility_type: "Assembly Plant".to_string(),
            primary_shippers: "Nissan".to_string(),
            position: Position { lat: 36.0086, lng: -86.5186 },
        },
        Terminal {
            id: "2".to_string(),
            name: "Cambridge".to_string(),
            terminal_number: "22".to_string(),
            address: "123 Industrial Way".to_string(),
            city: "Cambridge".to_string(),
            state: "ON".to_string(),
            zip: "N1R 3G2".to_string(),
            phone: "519-555-0123".to_string(),
            manager: "John Smith".to_string(),
            drivers: 12,
            shop: 6,
            other: 3,
            total: 21,
            opened: "03/15/03".to_string(),
            shop_bays: "8 Bay Full Service Repair Facility".to_string(),
            facility_type: "Distribution Center".to_string(),
            primary_shippers: "Toyota, Honda".to_string(),
            position: Position { lat: 43.3616, lng: -80.3144 },
        },
        Terminal {
            id: "3".to_string(),
            name: "Woodstock".to_string(),
            terminal_number: "23".to_string(),
            address: "456 Transport Blvd".to_string(),
            city: "Woodstock".to_string(),
            state: "ON".to_string(),
            zip: "N4S 7V8".to_string(),
            phone: "519-555-0456".to_string(),
            manager: "Sarah Johnson".to_string(),
            drivers: 10,
            shop: 5,
            other: 2,
            total: 17,
            opened: "08/22/04".to_string(),
            shop_bays: "7 Bay Full Service Repair Facility".to_string(),
            facility_type: "Regional Hub".to_string(),
            primary_shippers: "Ford, GM".to_string(),
            position: Position { lat: 43.1315, lng: -80.7464 },
        },
    ]
}

pub fn shipping_locations() -> Vec<ShippingLocation> {
    vec![
        ShippingLocation {
            id: "1".to_string(),
            name: "Niagara, NY (82)".to_string(),
            terminal_source: "22 - CAMBRIDGE".to_string(),
            city: "Niagara".to_string(),
            state: "NY".to_string(),
            count: 82,
            position: Position { lat: 43.0962, lng: -79.0377 },
        },
        ShippingLocation {
            id: "2".to_string(),
            name: "Woodstock, ON (3)".to_string(),
            terminal_source: "22 - CAMBRIDGE".to_string(),
            city: "Woodstock".to_string(),
            state: "ON".to_string(),
            count: 3,
            position: Position { lat: 43.1315, lng: -80.7464 },
        },
        ShippingLocation {
            id: "3".to_string(),
            name: "Niagara, NY (26)".to_string(),
            terminal_source: "23 - WOODSTOCK".to_string(),
            city: "Niagara".to_string(),
            state: "NY".to_string(),
            count: 26,
            position: Position { lat: 43.0962, lng: -79.0377 },
        },
        ShippingLocation {
            id: "4".to_string(),
            name: "Buffalo, NY (45)".to_string(),
            terminal_source: "22 - CAMBRIDGE".to_string(),
            city: "Buffalo".to_string(),
            state: "NY".to_string(),
            count: 45,
            position: Position { lat: 42.8864, lng: -78.8784 },
        },
        ShippingLocation {
            id: "5".to_string(),
            name: "Detroit, MI (67)".to_string(),
            terminal_source: "23 - WOODSTOCK".to_string(),
            city: "Detroit".to_string(),
            state: "MI".to_string(),
            count: 67,
            position: Position { lat: 42.3314, lng: -83.0458 },
        },
    ]
}
