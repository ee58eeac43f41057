// fixtures/pages.rs
//
// Builds marketplace search result pages with the markup the scraper reads:
// result blocks, h2 titles, offscreen prices and secondary unit price spans.

/// One result block of a generated page
#[derive(Clone, Debug, Default)]
pub struct Listing {
    pub title: Option<String>,
    pub href: Option<String>,
    /// Offscreen price text, e.g. "12,34 €"
    pub price: Option<String>,
    /// Unit price span text, e.g. "(2,47 €/kg)"
    pub unit_price: Option<String>,
}

impl Listing {
    pub fn new(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Self::default()
        }
    }

    pub fn href(mut self, href: &str) -> Self {
        self.href = Some(href.to_string());
        self
    }

    pub fn price(mut self, price: &str) -> Self {
        self.price = Some(price.to_string());
        self
    }

    pub fn unit_price(mut self, unit_price: &str) -> Self {
        self.unit_price = Some(unit_price.to_string());
        self
    }

    fn to_html(&self) -> String {
        let mut html = String::from(r#"<div data-component-type="s-search-result" class="s-result-item">"#);
        // sponsored-style link without a product path comes first
        html.push_str(r##"<a href="#sponsored">Sponsorisé</a>"##);
        if let Some(href) = &self.href {
            html.push_str(&format!(r#"<a class="a-link-normal" href="{}">"#, href));
        }
        if let Some(title) = &self.title {
            html.push_str(&format!("<h2><span>{}</span></h2>", title));
        }
        if self.href.is_some() {
            html.push_str("</a>");
        }
        if let Some(price) = &self.price {
            html.push_str(&format!(
                r#"<span class="a-price"><span class="a-offscreen">{}</span><span aria-hidden="true">{}</span></span>"#,
                price, price
            ));
        }
        html.push_str(r#"<span class="a-size-base a-color-secondary">Livraison GRATUITE</span>"#);
        if let Some(unit_price) = &self.unit_price {
            html.push_str(&format!(
                r#"<span class="a-size-base a-color-secondary">{}</span>"#,
                unit_price
            ));
        }
        html.push_str("</div>");
        html
    }
}

/// Full HTML document containing the given listings
pub fn search_page_html(listings: &[Listing]) -> String {
    let blocks: String = listings.iter().map(Listing::to_html).collect();
    format!(
        "<!DOCTYPE html><html><head><title>Résultats</title></head><body>\
         <div class=\"s-main-slot\">{}</div></body></html>",
        blocks
    )
}
