use crate::models::DietTag::{self, *};
use crate::models::{Macros, MealRecord};

fn meal(
    id: &str,
    name: &str,
    tags: &[DietTag],
    ingredients: &[&str],
    macros: (f64, f64, f64, f64),
    sodium: f64,
    notes: &str,
) -> MealRecord {
    let (calories, protein, carbs, fat) = macros;
    MealRecord::new(id, name)
        .with_tags(tags.iter().copied())
        .with_ingredients(ingredients.iter().copied())
        .with_macros(Macros::new(calories, protein, carbs, fat))
        .with_sodium(sodium)
        .with_notes(notes)
}

/// Twelve everyday meals with per-serving macros.
pub fn builtin_meals() -> Vec<MealRecord> {
    vec![
        meal(
            "grilled-salmon-bowl",
            "Grilled Salmon Bowl",
            &[Pescatarian, GlutenFree, NutFree],
            &[
                "grilled salmon 5 oz",
                "quinoa 1 cup",
                "spinach",
                "tomato",
                "olive oil",
                "lemon",
                "plain yogurt 1/2 cup",
            ],
            (650.0, 45.0, 55.0, 24.0),
            520.0,
            "Omega-3s.",
        ),
        meal(
            "chicken-sweet-potato",
            "Chicken Thigh + Sweet Potato Plate",
            &[GlutenFree, DairyFree, NutFree],
            &[
                "roasted chicken thigh 6 oz",
                "baked sweet potato",
                "steamed broccoli",
                "tahini drizzle",
            ],
            (620.0, 42.0, 62.0, 18.0),
            480.0,
            "Balanced plate.",
        ),
        meal(
            "tofu-stir-fry",
            "Tofu Stir-Fry",
            &[Vegetarian, Vegan, Pescatarian, DairyFree, NutFree],
            &[
                "extra-firm tofu 6 oz",
                "mixed vegetables",
                "brown rice 1 cup",
                "garlic-ginger sauce (low sodium)",
            ],
            (600.0, 36.0, 70.0, 16.0),
            420.0,
            "Plant protein. Gluten depends on the sauce.",
        ),
        meal(
            "lentil-curry",
            "Lentil Curry + Rice",
            &[Vegetarian, Vegan, Pescatarian, GlutenFree, DairyFree, NutFree],
            &["red lentil curry 1.5 cups", "basmati rice 1 cup", "cucumber salad"],
            (680.0, 32.0, 98.0, 16.0),
            540.0,
            "Good fiber.",
        ),
        meal(
            "turkey-chili",
            "Turkey Chili (Lean)",
            &[GlutenFree, DairyFree, NutFree],
            &["ground turkey 93% 6 oz", "beans", "tomato", "onion", "spices"],
            (640.0, 48.0, 58.0, 18.0),
            620.0,
            "High protein.",
        ),
        meal(
            "beef-steak-plate",
            "Beef Steak Plate",
            &[GlutenFree, NutFree],
            &["sirloin steak 6 oz", "roasted potatoes", "asparagus", "butter"],
            (720.0, 50.0, 46.0, 30.0),
            540.0,
            "Creatine-rich. Omit butter to be dairy-free.",
        ),
        meal(
            "egg-white-omelet",
            "Egg White Veggie Omelet + Oats",
            &[Vegetarian, Pescatarian, DairyFree, NutFree],
            &[
                "egg white omelet (4 whites)",
                "mixed veggies",
                "rolled oats 1 cup",
                "berries",
            ],
            (520.0, 36.0, 66.0, 8.0),
            420.0,
            "Light. Gluten depends on the oats.",
        ),
        meal(
            "greek-yogurt-bowl",
            "Greek Yogurt Power Bowl",
            &[Vegetarian, Pescatarian, GlutenFree],
            &[
                "plain Greek yogurt 1.5 cups",
                "berries",
                "chia seeds",
                "walnuts",
                "honey",
            ],
            (580.0, 42.0, 48.0, 20.0),
            180.0,
            "Easy.",
        ),
        meal(
            "sardine-avocado-toast",
            "Sardine Avocado Toast",
            &[Pescatarian, DairyFree, NutFree],
            &[
                "whole-grain toast 2 slices",
                "sardines in olive oil 1 tin",
                "avocado",
                "lemon",
            ],
            (560.0, 32.0, 44.0, 28.0),
            520.0,
            "Omega-3s.",
        ),
        meal(
            "tempeh-buddha-bowl",
            "Tempeh Buddha Bowl",
            &[Vegetarian, Vegan, Pescatarian, DairyFree, NutFree],
            &[
                "tempeh 6 oz",
                "farro 1 cup",
                "kale",
                "roasted peppers",
                "tahini-lemon",
            ],
            (620.0, 38.0, 70.0, 16.0),
            460.0,
            "Fermented.",
        ),
        meal(
            "shrimp-rice-bowl",
            "Shrimp Rice Bowl",
            &[Pescatarian, GlutenFree, DairyFree, NutFree],
            &[
                "shrimp 6 oz",
                "jasmine rice 1 cup",
                "cabbage slaw",
                "lime",
                "olive oil",
            ],
            (600.0, 42.0, 64.0, 14.0),
            640.0,
            "Lean protein.",
        ),
        meal(
            "chickpea-pasta-primavera",
            "Chickpea Pasta Primavera",
            &[Vegetarian, Vegan, Pescatarian, GlutenFree, DairyFree, NutFree],
            &[
                "chickpea pasta 3 oz dry",
                "zucchini",
                "tomato",
                "olive oil",
                "basil",
            ],
            (580.0, 34.0, 70.0, 14.0),
            380.0,
            "High fiber.",
        ),
    ]
}
