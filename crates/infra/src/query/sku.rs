//! Product SKU listing: filter, then sort, then paginate.

use core::cmp::Ordering;
use core::str::FromStr;

use categorydesk_catalog::{ProductSku, SkuStatus};
use categorydesk_core::DomainError;

use super::{Page, PageRequest};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(DomainError::validation("sortOrder", "sortOrder must be one of: asc, desc")),
        }
    }
}

/// Sortable SKU fields. A closed set, so an unknown `sortBy` is rejected
/// instead of silently comparing missing values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkuSortField {
    Id,
    Mpn,
    ProductName,
    #[default]
    DateUploaded,
    Seller,
    Brand,
    Category,
    Status,
    AvailableOnBrandWebsite,
}

impl SkuSortField {
    pub const ALL: [SkuSortField; 9] = [
        SkuSortField::Id,
        SkuSortField::Mpn,
        SkuSortField::ProductName,
        SkuSortField::DateUploaded,
        SkuSortField::Seller,
        SkuSortField::Brand,
        SkuSortField::Category,
        SkuSortField::Status,
        SkuSortField::AvailableOnBrandWebsite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkuSortField::Id => "id",
            SkuSortField::Mpn => "mpn",
            SkuSortField::ProductName => "productName",
            SkuSortField::DateUploaded => "dateUploaded",
            SkuSortField::Seller => "seller",
            SkuSortField::Brand => "brand",
            SkuSortField::Category => "category",
            SkuSortField::Status => "status",
            SkuSortField::AvailableOnBrandWebsite => "availableOnBrandWebsite",
        }
    }

    fn compare(&self, a: &ProductSku, b: &ProductSku) -> Ordering {
        match self {
            SkuSortField::Id => a.id.cmp(&b.id),
            SkuSortField::Mpn => a.mpn.cmp(&b.mpn),
            SkuSortField::ProductName => a.product_name.cmp(&b.product_name),
            SkuSortField::DateUploaded => a.date_uploaded.cmp(&b.date_uploaded),
            SkuSortField::Seller => a.seller.cmp(&b.seller),
            SkuSortField::Brand => a.brand.cmp(&b.brand),
            SkuSortField::Category => a.category.cmp(&b.category),
            SkuSortField::Status => a.status.as_str().cmp(b.status.as_str()),
            SkuSortField::AvailableOnBrandWebsite => {
                a.available_on_brand_website.cmp(&b.available_on_brand_website)
            }
        }
    }
}

impl FromStr for SkuSortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkuSortField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| DomainError::validation("sortBy", format!("cannot sort by {s:?}")))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkuSort {
    pub field: SkuSortField,
    pub order: SortOrder,
}

impl SkuSort {
    pub fn new(field: SkuSortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Compare by the sort field in the requested direction; ties always
    /// fall back to id ascending.
    fn compare(&self, a: &ProductSku, b: &ProductSku) -> Ordering {
        let ord = self.field.compare(a, b);
        let ord = match self.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        };
        ord.then_with(|| a.id.cmp(&b.id))
    }
}

/// Conjunctive SKU filter. `None` and empty strings are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkuFilter {
    pub seller: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub mpn: Option<String>,
    pub product_name: Option<String>,
    pub status: Option<SkuStatus>,
    pub available_on_brand_website: Option<bool>,
}

impl SkuFilter {
    pub fn matches(&self, sku: &ProductSku) -> bool {
        Matcher::new(self).matches(sku)
    }
}

type TextField = fn(&ProductSku) -> &str;

fn seller(s: &ProductSku) -> &str {
    &s.seller
}

fn brand(s: &ProductSku) -> &str {
    &s.brand
}

fn category(s: &ProductSku) -> &str {
    &s.category
}

fn mpn(s: &ProductSku) -> &str {
    &s.mpn
}

fn product_name(s: &ProductSku) -> &str {
    &s.product_name
}

/// Filter with its substring needles lowercased once up front.
struct Matcher {
    contains: Vec<(TextField, String)>,
    status: Option<SkuStatus>,
    available_on_brand_website: Option<bool>,
}

impl Matcher {
    fn new(filter: &SkuFilter) -> Self {
        let fields: [(TextField, &Option<String>); 5] = [
            (seller, &filter.seller),
            (brand, &filter.brand),
            (category, &filter.category),
            (mpn, &filter.mpn),
            (product_name, &filter.product_name),
        ];

        let contains = fields
            .into_iter()
            .filter_map(|(get, needle)| match needle.as_deref() {
                Some(n) if !n.is_empty() => Some((get, n.to_lowercase())),
                _ => None,
            })
            .collect();

        Self {
            contains,
            status: filter.status,
            available_on_brand_website: filter.available_on_brand_website,
        }
    }

    fn matches(&self, sku: &ProductSku) -> bool {
        self.contains
            .iter()
            .all(|(get, needle)| get(sku).to_lowercase().contains(needle.as_str()))
            && self.status.is_none_or(|s| sku.status == s)
            && self
                .available_on_brand_website
                .is_none_or(|a| sku.available_on_brand_website == a)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkuQuery {
    pub page: PageRequest,
    pub sort: SkuSort,
    pub filter: SkuFilter,
}

impl SkuQuery {
    /// Run against `skus` (given in insertion order).
    ///
    /// `total` counts the filtered set before pagination.
    pub fn run<'a, I>(&self, skus: I) -> Page<ProductSku>
    where
        I: IntoIterator<Item = &'a ProductSku>,
    {
        let matcher = Matcher::new(&self.filter);
        let mut matched: Vec<&ProductSku> = skus.into_iter().filter(|s| matcher.matches(s)).collect();
        matched.sort_by(|a, b| self.sort.compare(a, b));

        Page::paginate(matched.into_iter().cloned(), self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use categorydesk_catalog::NewProductSku;
    use categorydesk_core::RecordId;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    fn sku(
        id: u64,
        seller: &str,
        brand: &str,
        category: &str,
        status: SkuStatus,
        available: bool,
    ) -> ProductSku {
        NewProductSku {
            mpn: format!("MPN-{id:03}"),
            product_name: format!("{brand} product {id}"),
            seller: seller.into(),
            brand: brand.into(),
            category: category.into(),
            status,
            available_on_brand_website: available,
        }
        .into_record(RecordId::new(id), base_time() + Duration::minutes(id as i64))
    }

    fn catalog() -> Vec<ProductSku> {
        vec![
            sku(1, "Westcoast", "Samsung", "Mobile phones", SkuStatus::ToBeReviewed, true),
            sku(2, "Exertis", "Sony", "Audio equipment", SkuStatus::UnderReview, true),
            sku(3, "TechTrade", "Dell", "Computers", SkuStatus::Reviewed, false),
            sku(4, "Westcoast", "LG", "Monitors", SkuStatus::ToBeReviewed, true),
            sku(5, "Exertis", "Apple", "Mobile phones", SkuStatus::UnderReview, true),
            sku(6, "TechTrade", "Apple", "Computers", SkuStatus::Reviewed, false),
        ]
    }

    fn ids(page: &Page<ProductSku>) -> Vec<u64> {
        page.data.iter().map(|s| s.id.get()).collect()
    }

    #[test]
    fn default_query_lists_newest_first() {
        let skus = catalog();
        let page = SkuQuery::default().run(&skus);
        assert_eq!(ids(&page), vec![6, 5, 4, 3, 2, 1]);
        assert_eq!(page.total, 6);
    }

    #[test]
    fn string_filters_are_case_insensitive_substrings() {
        let skus = catalog();
        let query = SkuQuery {
            filter: SkuFilter {
                seller: Some("EXERT".into()),
                ..Default::default()
            },
            sort: SkuSort::new(SkuSortField::Id, SortOrder::Asc),
            ..Default::default()
        };
        assert_eq!(ids(&query.run(&skus)), vec![2, 5]);
    }

    #[test]
    fn filters_compose_conjunctively() {
        let skus = catalog();
        let query = SkuQuery {
            filter: SkuFilter {
                category: Some("phones".into()),
                status: Some(SkuStatus::UnderReview),
                ..Default::default()
            },
            ..Default::default()
        };
        let page = query.run(&skus);
        assert_eq!(ids(&page), vec![5]);
        assert_eq!(page.total, 1);
    }

    #[test]
    fn status_and_availability_match_exactly() {
        let skus = catalog();
        let query = SkuQuery {
            filter: SkuFilter {
                available_on_brand_website: Some(false),
                ..Default::default()
            },
            sort: SkuSort::new(SkuSortField::Id, SortOrder::Asc),
            ..Default::default()
        };
        assert_eq!(ids(&query.run(&skus)), vec![3, 6]);
    }

    #[test]
    fn empty_filter_values_are_skipped() {
        let skus = catalog();
        let query = SkuQuery {
            filter: SkuFilter {
                brand: Some(String::new()),
                seller: Some(String::new()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(query.run(&skus).total, 6);
    }

    #[test]
    fn equal_keys_break_ties_by_id_ascending_in_both_directions() {
        let skus = catalog();
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let query = SkuQuery {
                sort: SkuSort::new(SkuSortField::Brand, order),
                filter: SkuFilter {
                    brand: Some("apple".into()),
                    ..Default::default()
                },
                ..Default::default()
            };
            assert_eq!(ids(&query.run(&skus)), vec![5, 6], "order {order:?}");
        }
    }

    #[test]
    fn identical_timestamps_fall_back_to_id() {
        let mut skus = catalog();
        for s in &mut skus {
            s.date_uploaded = base_time();
        }
        let page = SkuQuery::default().run(&skus);
        assert_eq!(ids(&page), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn sorts_strings_ascending() {
        let skus = catalog();
        let query = SkuQuery {
            sort: SkuSort::new(SkuSortField::Seller, SortOrder::Asc),
            ..Default::default()
        };
        let sellers: Vec<_> = query.run(&skus).data.into_iter().map(|s| s.seller).collect();
        assert_eq!(
            sellers,
            vec!["Exertis", "Exertis", "TechTrade", "TechTrade", "Westcoast", "Westcoast"]
        );
    }

    #[test]
    fn pagination_reports_filtered_total() {
        let skus = catalog();
        let query = SkuQuery {
            page: PageRequest::new(2, 4).unwrap(),
            ..Default::default()
        };
        let page = query.run(&skus);
        assert_eq!(ids(&page), vec![2, 1]);
        assert_eq!(page.total, 6);
    }

    #[test]
    fn parses_sort_params() {
        assert_eq!("productName".parse::<SkuSortField>().unwrap(), SkuSortField::ProductName);
        assert!("price".parse::<SkuSortField>().is_err());
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert!("up".parse::<SortOrder>().is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_sku(id: u64) -> impl Strategy<Value = ProductSku> {
            (
                prop::sample::select(vec!["Westcoast", "Exertis", "TechTrade"]),
                prop::sample::select(vec!["Samsung", "Sony", "Apple", "LG"]),
                prop::sample::select(SkuStatus::ALL.to_vec()),
                any::<bool>(),
                0i64..50,
            )
                .prop_map(move |(seller, brand, status, available, minutes)| {
                    let mut s = sku(id, seller, brand, "Computers", status, available);
                    s.date_uploaded = base_time() + Duration::minutes(minutes);
                    s
                })
        }

        fn arb_catalog() -> impl Strategy<Value = Vec<ProductSku>> {
            (0usize..30).prop_flat_map(|n| {
                (1..=n as u64).map(arb_sku).collect::<Vec<_>>()
            })
        }

        fn arb_filter() -> impl Strategy<Value = SkuFilter> {
            (
                proptest::option::of(prop::sample::select(vec!["west", "EX", "trade", ""])),
                proptest::option::of(prop::sample::select(vec!["sam", "SONY", "apple"])),
                proptest::option::of(prop::sample::select(SkuStatus::ALL.to_vec())),
                proptest::option::of(any::<bool>()),
            )
                .prop_map(|(seller, brand, status, available)| SkuFilter {
                    seller: seller.map(str::to_string),
                    brand: brand.map(str::to_string),
                    status,
                    available_on_brand_website: available,
                    ..Default::default()
                })
        }

        proptest! {
            /// Property: total equals the number of records matching every
            /// predicate, independent of page and limit.
            #[test]
            fn total_is_independent_of_pagination(
                skus in arb_catalog(),
                filter in arb_filter(),
                page in 1u32..6,
                limit in 1u32..8,
            ) {
                let expected = skus.iter().filter(|s| filter.matches(s)).count() as u64;
                let query = SkuQuery {
                    page: PageRequest::new(page, limit).unwrap(),
                    filter,
                    ..Default::default()
                };
                let result = query.run(&skus);

                prop_assert_eq!(result.total, expected);
                prop_assert!(result.data.len() <= limit as usize);
                prop_assert!(result.data.iter().all(|s| query.filter.matches(s)));
            }

            /// Property: walking every page yields each matching record
            /// exactly once, in sorted order.
            #[test]
            fn pages_concatenate_to_the_full_sorted_result(
                skus in arb_catalog(),
                limit in 1u32..5,
                ascending in any::<bool>(),
            ) {
                let order = if ascending { SortOrder::Asc } else { SortOrder::Desc };
                let sort = SkuSort::new(SkuSortField::DateUploaded, order);
                let everything = SkuQuery {
                    page: PageRequest::new(1, u32::MAX).unwrap(),
                    sort,
                    ..Default::default()
                }
                .run(&skus);

                let mut walked = Vec::new();
                let mut page = 1;
                loop {
                    let chunk = SkuQuery {
                        page: PageRequest::new(page, limit).unwrap(),
                        sort,
                        ..Default::default()
                    }
                    .run(&skus);
                    if chunk.data.is_empty() {
                        prop_assert_eq!(chunk.total, everything.total);
                        break;
                    }
                    walked.extend(chunk.data);
                    page += 1;
                }

                prop_assert_eq!(walked, everything.data);
            }
        }
    }
}
