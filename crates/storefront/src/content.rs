//! Static page copy: hero, delivery terms, reviews, contacts.
//!
//! None of this changes at runtime. It lives in code rather than templates so
//! the page stays a straight iteration over data.

/// Hero block at the top of the page.
#[derive(Clone)]
pub struct HeroContent {
    pub emoji: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button_text: &'static str,
}

/// One delivery promise card.
#[derive(Clone)]
pub struct DeliveryFeature {
    /// CSS modifier selecting the card's icon.
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// A customer review.
#[derive(Clone)]
pub struct Review {
    pub name: &'static str,
    /// Number of stars, 1 to 5.
    pub rating: usize,
    pub text: &'static str,
}

impl Review {
    /// Rating rendered as star characters.
    #[must_use]
    pub fn stars(&self) -> String {
        "★".repeat(self.rating)
    }
}

/// One line in the contacts block.
#[derive(Clone)]
pub struct ContactLine {
    pub icon: &'static str,
    pub text: &'static str,
    pub href: Option<&'static str>,
}

/// All static copy for the page.
#[derive(Clone)]
pub struct SiteContent {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub hero: HeroContent,
    pub delivery: Vec<DeliveryFeature>,
    pub reviews: Vec<Review>,
    pub contacts: Vec<ContactLine>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: "SWEET JOY",
            tagline: "Сладкие букеты с любовью",
            hero: HeroContent {
                emoji: "🎁",
                title: "Sweet Joy",
                subtitle: "Сладкие букеты для ваших особенных моментов",
                button_text: "Выбрать букет",
            },
            delivery: vec![
                DeliveryFeature {
                    icon: "truck",
                    title: "Быстро",
                    text: "Доставка за 2 часа",
                },
                DeliveryFeature {
                    icon: "map-pin",
                    title: "По городу",
                    text: "Бесплатно от 3000₽",
                },
                DeliveryFeature {
                    icon: "clock",
                    title: "Точно в срок",
                    text: "Доставка ко времени",
                },
            ],
            reviews: vec![
                Review {
                    name: "Анна",
                    rating: 5,
                    text: "Потрясающий букет! Виновница торжества была в восторге!",
                },
                Review {
                    name: "Дмитрий",
                    rating: 5,
                    text: "Быстрая доставка, все свежее и красиво упаковано",
                },
                Review {
                    name: "Мария",
                    rating: 5,
                    text: "Заказываю уже третий раз - всегда высокое качество!",
                },
            ],
            contacts: vec![
                ContactLine {
                    icon: "phone",
                    text: "+7 (999) 123-45-67",
                    href: Some("tel:+79991234567"),
                },
                ContactLine {
                    icon: "mail",
                    text: "info@sweetjoy.ru",
                    href: Some("mailto:info@sweetjoy.ru"),
                },
                ContactLine {
                    icon: "map-pin",
                    text: "г. Москва, ул. Праздничная, 15",
                    href: None,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reviews_have_valid_ratings() {
        let content = SiteContent::default();
        assert_eq!(content.reviews.len(), 3);
        assert!(content.reviews.iter().all(|r| (1..=5).contains(&r.rating)));
    }

    #[test]
    fn test_review_stars() {
        let review = Review {
            name: "Анна",
            rating: 3,
            text: "",
        };
        assert_eq!(review.stars(), "★★★");
    }

    #[test]
    fn test_delivery_cards() {
        let titles: Vec<&str> = SiteContent::default()
            .delivery
            .iter()
            .map(|d| d.title)
            .collect();
        assert_eq!(titles, vec!["Быстро", "По городу", "Точно в срок"]);
    }
}
