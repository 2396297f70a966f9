//! Pure rendering of the product grid. Produces markup only; writing it into
//! the page is the caller's concern.
//!
//! Card markup carries the class names `product-card` and `cta-button`,
//! which the site stylesheet depends on.

use crate::domain::model::Product;
use crate::utils::error::Result;
use crate::utils::links::LinkPolicy;
use askama::Template;

/// One product card ready for rendering, link and image already decorated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub caption: String,
}

#[derive(Template)]
#[template(path = "product_grid.html")]
struct GridTemplate<'a> {
    cards: &'a [Card],
}

/// Build cards from products in source order. Source order is display order.
pub fn build_cards(products: &[Product], links: &LinkPolicy, caption: &str) -> Vec<Card> {
    products
        .iter()
        .map(|product| Card {
            title: product.title.clone(),
            description: product.description.clone(),
            image: links.resolve_image(&product.image),
            link: links.decorate_link(&product.link),
            caption: caption.to_string(),
        })
        .collect()
}

pub fn render_grid(cards: &[Card]) -> Result<String> {
    let grid = GridTemplate { cards };
    Ok(grid.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, description: &str, image: &str, link: &str) -> Product {
        Product {
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn renders_one_card_with_all_fields() {
        let products = vec![product("A", "d1", "i1.png", "https://x")];
        let cards = build_cards(&products, &LinkPolicy::default(), "Découvrir");
        let html = render_grid(&cards).unwrap();

        assert_eq!(html.matches("product-card").count(), 1);
        assert!(html.contains("<h3>A</h3>"));
        assert!(html.contains("<p>d1</p>"));
        assert!(html.contains(r#"src="i1.png""#));
        assert!(html.contains(r#"alt="A""#));
        assert!(html.contains(r#"href="https://x""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(">Découvrir</a>"));
    }

    #[test]
    fn preserves_source_order() {
        let products = vec![
            product("First", "", "", ""),
            product("Second", "", "", ""),
            product("Third", "", "", ""),
        ];
        let cards = build_cards(&products, &LinkPolicy::default(), "Voir");
        let html = render_grid(&cards).unwrap();

        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        let third = html.find("Third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn empty_product_list_renders_no_cards() {
        let html = render_grid(&[]).unwrap();
        assert!(!html.contains("product-card"));
    }

    #[test]
    fn escapes_markup_in_fields() {
        let products = vec![product("<script>", "a & b", "", "")];
        let cards = build_cards(&products, &LinkPolicy::default(), "Voir");
        let html = render_grid(&cards).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn cards_carry_decorated_links() {
        let policy = LinkPolicy::new(
            Some("https://lueur-quotidienne.netlify.app"),
            Some(crate::domain::model::UtmParams {
                source: "lueurquotidienne".to_string(),
                medium: "site".to_string(),
                campaign: "daily_quote".to_string(),
            }),
        )
        .unwrap();
        let products = vec![product("A", "d", "assets/a.jpg", "https://shop.example/item")];
        let cards = build_cards(&products, &policy, "Voir");

        assert_eq!(
            cards[0].image,
            "https://lueur-quotidienne.netlify.app/assets/a.jpg"
        );
        assert!(cards[0].link.contains("utm_source=lueurquotidienne"));
    }
}
