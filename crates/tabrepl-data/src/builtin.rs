//! The fixed set of datasets shipped with tabrepl.
//!
//! These are fixtures, not a loader: four small tables addressed by name.

use crate::error::{Error, Result};
use crate::source::DatasetSource;
use crate::table::Table;

/// Names of the built-in datasets, in listing order.
pub const BUILTIN_NAMES: [&str; 4] = ["students", "burgers", "cats", "stars"];

const STUDENTS: &[&[&str]] = &[
    &["Name", "Age", "Gender", "Major", "GPA"],
    &["John Doe", "20", "Male", "Computer Science", "3.5"],
    &["Jane Smith", "", "Female", "Business", "3.2"],
    &["David Lee", "21", "Male", "Mechanical Engineering", "3.9"],
    &["Amy Chen", "18", "Female", "Biology", "3.7"],
    &["Michael Johnson", "22", "Male", "History", "3.1"],
    &["Emily Brown", "20", "Female", "Psychology", "3.8"],
    &["", "", "", "", "3.4"],
    &["Grace Lee", "21", "Female", "Chemistry", "3.6"],
    &["Daniel Park", "18", "Male", "English", "3.3"],
    &["Sophia Lee", "20", "Female", "Mathematics", "3.8"],
];

const BURGERS: &[&[&str]] = &[
    &["Name", "Price", "Calories", "Toppings", "Description"],
    &[
        "Classic Burger",
        "7.99",
        "900",
        "Lettuce Tomato Onion Pickles",
        "Our signature burger with all the fixings",
    ],
    &[
        "Mushroom Swiss Burger",
        "8.99",
        "950",
        "Sauteed Mushrooms Swiss Cheese Lettuce Tomato",
        "Our classic burger with a twist",
    ],
    &[
        "Bacon Cheeseburger",
        "9.99",
        "1100",
        "Bacon Cheddar Cheese Lettuce Tomato Onion",
        "A hearty burger for bacon lovers",
    ],
    &[
        "Veggie Burger",
        "8.99",
        "700",
        "Lettuce Tomato Onion Avocado",
        "A delicious vegetarian option for burger lovers",
    ],
    &[
        "Double Cheeseburger",
        "10.99",
        "1300",
        "Lettuce Tomato Onion Pickles",
        "A double helping of our classic burger",
    ],
];

const CATS: &[&[&str]] = &[
    &["Name", "Age", "Color", "Breed", "Personality"],
    &["Fluffy", "2", "White", "Persian", "Playful and curious"],
    &[
        "Mittens",
        "4",
        "Black and White",
        "Domestic Shorthair",
        "Calm and affectionate",
    ],
    &["Socks", "1", "Tabby", "Maine Coon", "Energetic and adventurous"],
    &["Whiskers", "3", "Calico", "Ragdoll", "Gentle and loving"],
    &[
        "Tiger",
        "5",
        "Orange Tabby",
        "Bengal",
        "Confident and independent",
    ],
];

const STARS: &[&[&str]] = &[
    &["StarID", "ProperName", "X", "Y", "Z"],
    &["0", "Sol", "0", "0", "0"],
    &["1", "", "282.43485", "0.00449", "5.36884"],
    &["2", "", "43.04329", "0.00285", "-15.24144"],
    &["3", "", "277.11358", "0.02422", "223.27753"],
    &["3759", "96 G. Psc", "7.26388", "1.55643", "0.68697"],
    &["70667", "Proxima Centauri", "-0.47175", "-0.36132", "-1.15037"],
    &["71454", "Rigel Kentaurus B", "-0.50359", "-0.42128", "-1.1767"],
    &["71457", "Rigel Kentaurus A", "-0.50362", "-0.42139", "-1.17665"],
    &["87666", "Barnard's Star", "-0.01729", "-1.81533", "0.14824"],
    &["118721", "", "-2.28262", "0.64697", "0.29354"],
];

/// Source serving the four built-in datasets.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDatasets;

impl BuiltinDatasets {
    fn literal(name: &str) -> Option<&'static [&'static [&'static str]]> {
        match name {
            "students" => Some(STUDENTS),
            "burgers" => Some(BURGERS),
            "cats" => Some(CATS),
            "stars" => Some(STARS),
            _ => None,
        }
    }
}

impl DatasetSource for BuiltinDatasets {
    fn names(&self) -> Vec<&str> {
        BUILTIN_NAMES.to_vec()
    }

    fn contains(&self, name: &str) -> bool {
        Self::literal(name).is_some()
    }

    fn fetch(&self, name: &str) -> Result<Table> {
        let rows = Self::literal(name).ok_or_else(|| Error::UnknownDataset(name.to_string()))?;
        Table::from_literal(rows)
    }
}
