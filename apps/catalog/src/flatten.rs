use crate::domain::{Brand, Company, Detail, Product};

/// One detail joined with its product, brand and company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatDetail<'a> {
    pub company: &'a Company,
    pub brand: &'a Brand,
    pub product: &'a Product,
    pub detail: &'a Detail,
}

/// Walks brands, then products, then details, in source order.
pub fn flatten(company: &Company) -> impl Iterator<Item = FlatDetail<'_>> {
    company.brands.iter().flat_map(move |brand| {
        brand.products.iter().flat_map(move |product| {
            product.details.iter().map(move |detail| FlatDetail {
                company,
                brand,
                product,
                detail,
            })
        })
    })
}
