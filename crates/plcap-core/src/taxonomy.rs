//! Fixed vocabularies the registry accepts for the optional `sectors` and
//! `product_types` payload fields.

pub const SECTORS: &[&str] = &[
    "Agriculture",
    "Animal Production",
    "Apparel",
    "Apparel Accessories",
    "Appliances",
    "Aquaculture",
    "Automotive",
    "Biotechnology",
    "Coal",
    "Construction",
    "Electronics",
    "Energy",
    "Fishing",
    "Food & Beverage",
    "Footwear",
    "Forestry",
    "Furniture",
    "Hard Goods",
    "Health",
    "Healthcare",
    "Home",
    "Home Accessories",
    "Home Furnishings",
    "Home Textiles",
    "Jewelry",
    "Leather",
    "Logging",
    "Manufacturing",
    "Mining",
    "Nondurable Goods",
    "Oil & Gas",
    "Packaging",
    "Paper Products",
    "Personal Care Products",
    "Pharmaceuticals",
    "Plastics",
    "Printing",
    "Renewable Energy",
    "Rubber Products",
    "Sporting Goods",
    "Storage",
    "Textiles",
    "Toys",
    "Tobacco Products",
    "Utilities",
    "Warehousing",
    "Waste Management",
    "Wholesale Trade",
    "Wood Products",
];

pub const PRODUCT_TYPES: &[&str] = &[
    "Accessories",
    "Bags",
    "Belts",
    "Bottoms",
    "Dresses",
    "Denim",
    "Fabrics",
    "Footwear",
    "Gloves",
    "Hats",
    "Jackets",
    "Jewelry",
    "Knitwear",
    "Leather Goods",
    "Outerwear",
    "Shirts",
    "Sleepwear",
    "Socks",
    "Sportswear",
    "Suits",
    "Swimwear",
    "T-shirts",
    "Tops",
    "Underwear",
    "Uniforms",
];

/// Case-insensitive lookup returning the canonical sector spelling.
#[must_use]
pub fn find_sector(input: &str) -> Option<&'static str> {
    find_in(SECTORS, input)
}

/// Case-insensitive lookup returning the canonical product-type spelling.
#[must_use]
pub fn find_product_type(input: &str) -> Option<&'static str> {
    find_in(PRODUCT_TYPES, input)
}

fn find_in(list: &[&'static str], input: &str) -> Option<&'static str> {
    let needle = input.trim();
    list.iter().copied().find(|s| s.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_sector_ignoring_case() {
        assert_eq!(find_sector("food & beverage"), Some("Food & Beverage"));
        assert_eq!(find_sector("Spaceflight"), None);
    }

    #[test]
    fn finds_product_type_ignoring_case() {
        assert_eq!(find_product_type(" t-shirts "), Some("T-shirts"));
        assert_eq!(find_product_type(""), None);
    }
}
