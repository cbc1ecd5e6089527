//! Static per-locale word tables.
//!
//! Tables exist for `en`, `es`, and `fr`; any other locale code falls back
//! to `en` silently. Entries are ordered and the order is load-bearing:
//! draws index into these slices, so reordering or removing entries changes
//! previously generated catalogs. Appending is safe only for new locales.

pub(crate) struct WordTable {
    pub first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub company_suffixes: &'static [&'static str],
    pub adjectives: &'static [&'static str],
    pub products: &'static [&'static str],
    pub materials: &'static [&'static str],
    pub countries: &'static [&'static str],
    pub cities: &'static [&'static str],
    pub categories: &'static [&'static str],
}

/// Look up the table for a locale code, falling back to `en`.
pub(crate) fn table_for(locale: &str) -> &'static WordTable {
    match locale {
        "es" => &ES,
        "fr" => &FR,
        _ => &EN,
    }
}

pub(crate) static EN: WordTable = WordTable {
    first_names: &[
        "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael",
        "Linda", "David", "Elizabeth", "William", "Barbara", "Richard",
        "Susan", "Joseph", "Jessica", "Thomas", "Sarah", "Charles", "Karen",
    ],
    last_names: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller",
        "Davis", "Wilson", "Anderson", "Taylor", "Thomas", "Moore", "Martin",
        "Lee", "Thompson", "White", "Harris", "Clark", "Lewis",
    ],
    company_suffixes: &["Press", "Books", "Publishing", "House", "& Sons", "Group"],
    adjectives: &[
        "Rustic", "Sleek", "Gorgeous", "Incredible", "Fantastic", "Practical",
        "Intelligent", "Handcrafted", "Refined", "Unbranded", "Elegant",
        "Awesome", "Generic", "Licensed", "Ergonomic", "Small",
    ],
    products: &[
        "Chair", "Car", "Computer", "Gloves", "Pants", "Shirt", "Table",
        "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish", "Cheese",
        "Bacon", "Pizza", "Salad", "Sausages", "Chips",
    ],
    materials: &[
        "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite",
        "Rubber", "Metal", "Soft", "Fresh", "Frozen", "Bronze",
    ],
    countries: &[
        "Armenia", "Belgium", "Chile", "Denmark", "Egypt", "Finland",
        "Greece", "Hungary", "Iceland", "Japan", "Kenya", "Lithuania",
        "Morocco", "Norway", "Portugal", "Romania",
    ],
    cities: &[
        "Ashford", "Brighton", "Carlisle", "Derby", "Exeter", "Falmouth",
        "Gloucester", "Harrogate", "Ipswich", "Keswick", "Lancaster",
        "Margate", "Norwich", "Oxford", "Preston", "Ripon",
    ],
    categories: &[
        "Books", "Movies", "Music", "Games", "Electronics", "Computers",
        "Home", "Garden", "Tools", "Grocery", "Health", "Beauty", "Toys",
        "Kids", "Baby", "Clothing", "Shoes", "Jewelery", "Sports",
        "Outdoors", "Automotive", "Industrial",
    ],
};

pub(crate) static ES: WordTable = WordTable {
    first_names: &[
        "Antonio", "María", "Manuel", "Carmen", "José", "Ana", "Francisco",
        "Isabel", "Juan", "Dolores", "Javier", "Pilar", "Miguel", "Teresa",
        "Rafael", "Rosa", "Pedro", "Lucía", "Ángel", "Elena",
    ],
    last_names: &[
        "García", "Fernández", "González", "Rodríguez", "López", "Martínez",
        "Sánchez", "Pérez", "Gómez", "Martín", "Jiménez", "Ruiz",
        "Hernández", "Díaz", "Moreno", "Álvarez", "Romero", "Alonso",
        "Gutiérrez", "Navarro",
    ],
    company_suffixes: &["Editorial", "Ediciones", "Libros", "Prensa", "e Hijos", "Grupo"],
    adjectives: &[
        "Rústico", "Elegante", "Magnífico", "Increíble", "Fantástico",
        "Práctico", "Inteligente", "Artesanal", "Refinado", "Genérico",
        "Pequeño", "Ergonómico", "Moderno", "Clásico", "Sencillo", "Noble",
    ],
    products: &[
        "Silla", "Coche", "Ordenador", "Guantes", "Pantalones", "Camisa",
        "Mesa", "Zapatos", "Sombrero", "Toallas", "Jabón", "Atún", "Pollo",
        "Pescado", "Queso", "Tocino", "Pizza", "Ensalada", "Salchichas",
        "Patatas",
    ],
    materials: &[
        "Acero", "Madera", "Hormigón", "Plástico", "Algodón", "Granito",
        "Goma", "Metal", "Suave", "Fresco", "Congelado", "Bronce",
    ],
    countries: &[
        "Armenia", "Bélgica", "Chile", "Dinamarca", "Egipto", "Finlandia",
        "Grecia", "Hungría", "Islandia", "Japón", "Kenia", "Lituania",
        "Marruecos", "Noruega", "Portugal", "Rumanía",
    ],
    cities: &[
        "Albacete", "Burgos", "Cáceres", "Dénia", "Écija", "Figueres",
        "Girona", "Huesca", "Irún", "Jaén", "Logroño", "Mérida", "Nerja",
        "Oviedo", "Palencia", "Ronda",
    ],
    categories: &[
        "Libros", "Películas", "Música", "Juegos", "Electrónica",
        "Informática", "Hogar", "Jardín", "Herramientas", "Alimentación",
        "Salud", "Belleza", "Juguetes", "Niños", "Bebé", "Ropa", "Zapatos",
        "Joyería", "Deportes", "Aire libre", "Automoción", "Industria",
    ],
};

pub(crate) static FR: WordTable = WordTable {
    first_names: &[
        "Jean", "Marie", "Pierre", "Monique", "Michel", "Catherine",
        "André", "Nathalie", "Philippe", "Isabelle", "Alain", "Sylvie",
        "Bernard", "Françoise", "Jacques", "Martine", "Daniel", "Christine",
        "Claude", "Nicole",
    ],
    last_names: &[
        "Martin", "Bernard", "Thomas", "Petit", "Robert", "Richard",
        "Durand", "Dubois", "Moreau", "Laurent", "Simon", "Michel",
        "Lefebvre", "Leroy", "Roux", "David", "Bertrand", "Morel",
        "Fournier", "Girard",
    ],
    company_suffixes: &["Éditions", "Presse", "Livres", "Maison", "et Fils", "Groupe"],
    adjectives: &[
        "Rustique", "Élégant", "Magnifique", "Incroyable", "Fantastique",
        "Pratique", "Intelligent", "Artisanal", "Raffiné", "Générique",
        "Petit", "Ergonomique", "Moderne", "Classique", "Simple", "Noble",
    ],
    products: &[
        "Chaise", "Voiture", "Ordinateur", "Gants", "Pantalon", "Chemise",
        "Table", "Chaussures", "Chapeau", "Serviettes", "Savon", "Thon",
        "Poulet", "Poisson", "Fromage", "Lard", "Pizza", "Salade",
        "Saucisses", "Frites",
    ],
    materials: &[
        "Acier", "Bois", "Béton", "Plastique", "Coton", "Granit",
        "Caoutchouc", "Métal", "Doux", "Frais", "Surgelé", "Bronze",
    ],
    countries: &[
        "Arménie", "Belgique", "Chili", "Danemark", "Égypte", "Finlande",
        "Grèce", "Hongrie", "Islande", "Japon", "Kenya", "Lituanie",
        "Maroc", "Norvège", "Portugal", "Roumanie",
    ],
    cities: &[
        "Annecy", "Bayonne", "Colmar", "Dijon", "Épinal", "Figeac",
        "Grenoble", "Honfleur", "Issoire", "Joigny", "Lorient", "Menton",
        "Nevers", "Orange", "Pau", "Royan",
    ],
    categories: &[
        "Livres", "Films", "Musique", "Jeux", "Électronique", "Informatique",
        "Maison", "Jardin", "Outils", "Épicerie", "Santé", "Beauté",
        "Jouets", "Enfants", "Bébé", "Vêtements", "Chaussures", "Bijoux",
        "Sports", "Plein air", "Automobile", "Industrie",
    ],
};
