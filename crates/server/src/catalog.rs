//! Static product catalog.
//!
//! The catalog is an immutable value built once at startup and shared
//! read-only through [`crate::state::AppState`]. There is no catalog editing
//! API; the product data here must stay in sync with the front end.

use std::collections::HashMap;

use serde::Serialize;

/// A tea-growing region offered as a storefront filter.
#[derive(Debug, Clone, Serialize)]
pub struct Region {
    /// Stable filter key (e.g. "Fujian").
    pub key: String,
    /// Display label shown in the front end.
    pub label: String,
}

/// A catalog product. Immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Unique product identifier (e.g. "fj-rougui").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Region key, matching one of the catalog's [`Region`]s.
    pub region: String,
    /// Tea style description.
    pub style: String,
    /// Unit price in whole currency units.
    pub price: u32,
    /// Package weight label (e.g. "50g").
    pub weight: String,
    /// Ordered tasting notes.
    pub tasting: Vec<String>,
    /// Free-text merchandising note.
    pub note: String,
}

/// Immutable product catalog with a constant-time id index.
#[derive(Debug)]
pub struct Catalog {
    regions: Vec<Region>,
    products: Vec<Product>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from a region and product list.
    ///
    /// Later products with a duplicate id are unreachable by lookup; the
    /// built-in catalog has unique ids.
    #[must_use]
    pub fn new(regions: Vec<Region>, products: Vec<Product>) -> Self {
        let by_id = products
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.id.clone(), idx))
            .collect();
        Self {
            regions,
            products,
            by_id,
        }
    }

    /// The built-in storefront catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_regions(), builtin_products())
    }

    /// All regions, in display order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id. Absence is a valid result, not an error.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id).and_then(|&idx| self.products.get(idx))
    }

    /// Products matching an exact region key and a free-text query, in
    /// catalog order.
    ///
    /// The query is normalized (trimmed, lowercased) and matched as a
    /// substring of the product's name, style, weight, tasting notes, and
    /// note. An empty or absent query matches everything.
    #[must_use]
    pub fn filter(&self, region: Option<&str>, query: Option<&str>) -> Vec<&Product> {
        let q = query.map(normalize_query).unwrap_or_default();
        self.products
            .iter()
            .filter(|p| region.is_none_or(|r| p.region == r))
            .filter(|p| matches_query(p, &q))
            .collect()
    }
}

fn normalize_query(s: &str) -> String {
    s.trim().to_lowercase()
}

fn matches_query(p: &Product, q: &str) -> bool {
    if q.is_empty() {
        return true;
    }
    let hay = format!(
        "{} {} {} {} {}",
        p.name,
        p.style,
        p.weight,
        p.tasting.join(" "),
        p.note
    )
    .to_lowercase();
    hay.contains(q)
}

fn builtin_regions() -> Vec<Region> {
    let region = |key: &str, label: &str| Region {
        key: key.to_string(),
        label: label.to_string(),
    };
    vec![
        region("Fujian", "福建"),
        region("Yunnan", "云南"),
        region("Zhejiang", "浙江"),
        region("Taiwan", "台湾"),
        region("SriLanka", "斯里兰卡"),
        region("Assam", "印度·阿萨姆"),
    ]
}

#[allow(clippy::too_many_lines)]
fn builtin_products() -> Vec<Product> {
    let product = |id: &str,
                   name: &str,
                   region: &str,
                   style: &str,
                   price: u32,
                   weight: &str,
                   tasting: &[&str],
                   note: &str| Product {
        id: id.to_string(),
        name: name.to_string(),
        region: region.to_string(),
        style: style.to_string(),
        price,
        weight: weight.to_string(),
        tasting: tasting.iter().map(ToString::to_string).collect(),
        note: note.to_string(),
    };

    vec![
        product(
            "fj-rougui",
            "武夷肉桂",
            "Fujian",
            "乌龙·岩茶",
            68,
            "50g",
            &["桂皮香", "焙火", "岩韵"],
            "香气辛甜，汤感饱满，回甘利落。",
        ),
        product(
            "fj-baimudan",
            "白牡丹",
            "Fujian",
            "白茶",
            58,
            "50g",
            &["花香", "清甜", "柔润"],
            "花香清雅，入口甘润，适合日常。",
        ),
        product(
            "yn-lincang-shu",
            "临沧古树熟普",
            "Yunnan",
            "普洱·熟茶",
            88,
            "100g",
            &["醇滑", "糯甜", "陈香"],
            "汤感厚而不闷，甜度稳定，耐泡。",
        ),
        product(
            "yn-dianhong",
            "凤庆滇红",
            "Yunnan",
            "红茶",
            62,
            "60g",
            &["蜜香", "红薯甜", "暖意"],
            "蜜香明显，适合秋冬，亦可加奶。",
        ),
        product(
            "zj-longjing",
            "明前龙井",
            "Zhejiang",
            "绿茶",
            98,
            "50g",
            &["豆香", "鲜爽", "清甜"],
            "鲜爽度高，豆香显，尾段回甘清晰。",
        ),
        product(
            "tw-gaoshan",
            "高山乌龙",
            "Taiwan",
            "乌龙",
            92,
            "50g",
            &["兰花香", "奶香", "甘润"],
            "花香高扬，汤水细，冷泡也出彩。",
        ),
        product(
            "slk-ceylon",
            "锡兰柑橘红茶",
            "SriLanka",
            "红茶",
            72,
            "60g",
            &["柑橘", "清亮", "冷泡"],
            "果香干净，适合做冰红茶或冷泡。",
        ),
        product(
            "in-assam",
            "阿萨姆 CTC",
            "Assam",
            "红茶",
            55,
            "80g",
            &["麦芽香", "浓强", "奶茶"],
            "适合奶茶基底：浓、厚、香。",
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_unique() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.products().len(), 8);
        assert_eq!(catalog.by_id.len(), catalog.products().len());
    }

    #[test]
    fn test_lookup_hit() {
        let catalog = Catalog::builtin();
        let p = catalog.lookup("fj-rougui").unwrap();
        assert_eq!(p.name, "武夷肉桂");
        assert_eq!(p.price, 68);
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.lookup("nonexistent").is_none());
    }

    #[test]
    fn test_filter_by_region() {
        let catalog = Catalog::builtin();
        let yunnan = catalog.filter(Some("Yunnan"), None);
        assert_eq!(yunnan.len(), 2);
        assert!(yunnan.iter().all(|p| p.region == "Yunnan"));
    }

    #[test]
    fn test_filter_unknown_region_empty() {
        let catalog = Catalog::builtin();
        assert!(catalog.filter(Some("Atlantis"), None).is_empty());
    }

    #[test]
    fn test_filter_query_matches_tasting_notes() {
        let catalog = Catalog::builtin();
        let hits = catalog.filter(None, Some("蜜香"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().unwrap().id, "yn-dianhong");
    }

    #[test]
    fn test_filter_query_normalized() {
        let catalog = Catalog::builtin();
        // "CTC" appears uppercased in the product name
        let hits = catalog.filter(None, Some("  ctc "));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().unwrap().id, "in-assam");
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = Catalog::builtin();
        let all = catalog.filter(None, None);
        let ids: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.first(), Some(&"fj-rougui"));
        assert_eq!(ids.last(), Some(&"in-assam"));
        assert_eq!(all.len(), 8);
    }

    #[test]
    fn test_region_and_query_combined() {
        let catalog = Catalog::builtin();
        let hits = catalog.filter(Some("Fujian"), Some("白茶"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().unwrap().id, "fj-baimudan");
    }
}
