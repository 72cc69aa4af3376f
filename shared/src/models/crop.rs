//! Crop label map

/// Crops the classifier can recommend, keyed by their training label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crop {
    Rice,
    Maize,
    Jute,
    Cotton,
    Coconut,
    Papaya,
    Orange,
    Apple,
    Muskmelon,
    Watermelon,
    Grapes,
    Mango,
    Banana,
    Pomegranate,
    Lentil,
    Blackgram,
    Mungbean,
    Mothbeans,
    Pigeonpeas,
    Kidneybeans,
    Chickpea,
    Coffee,
}

impl Crop {
    /// All crops in label order (label 1 first)
    pub const ALL: [Crop; 22] = [
        Crop::Rice,
        Crop::Maize,
        Crop::Jute,
        Crop::Cotton,
        Crop::Coconut,
        Crop::Papaya,
        Crop::Orange,
        Crop::Apple,
        Crop::Muskmelon,
        Crop::Watermelon,
        Crop::Grapes,
        Crop::Mango,
        Crop::Banana,
        Crop::Pomegranate,
        Crop::Lentil,
        Crop::Blackgram,
        Crop::Mungbean,
        Crop::Mothbeans,
        Crop::Pigeonpeas,
        Crop::Kidneybeans,
        Crop::Chickpea,
        Crop::Coffee,
    ];

    /// Look up a classifier label. Returns `None` for codes outside 1..=22.
    pub fn from_code(code: i64) -> Option<Crop> {
        match code {
            1 => Some(Crop::Rice),
            2 => Some(Crop::Maize),
            3 => Some(Crop::Jute),
            4 => Some(Crop::Cotton),
            5 => Some(Crop::Coconut),
            6 => Some(Crop::Papaya),
            7 => Some(Crop::Orange),
            8 => Some(Crop::Apple),
            9 => Some(Crop::Muskmelon),
            10 => Some(Crop::Watermelon),
            11 => Some(Crop::Grapes),
            12 => Some(Crop::Mango),
            13 => Some(Crop::Banana),
            14 => Some(Crop::Pomegranate),
            15 => Some(Crop::Lentil),
            16 => Some(Crop::Blackgram),
            17 => Some(Crop::Mungbean),
            18 => Some(Crop::Mothbeans),
            19 => Some(Crop::Pigeonpeas),
            20 => Some(Crop::Kidneybeans),
            21 => Some(Crop::Chickpea),
            22 => Some(Crop::Coffee),
            _ => None,
        }
    }

    /// Training label for this crop
    pub fn code(&self) -> i64 {
        match self {
            Crop::Rice => 1,
            Crop::Maize => 2,
            Crop::Jute => 3,
            Crop::Cotton => 4,
            Crop::Coconut => 5,
            Crop::Papaya => 6,
            Crop::Orange => 7,
            Crop::Apple => 8,
            Crop::Muskmelon => 9,
            Crop::Watermelon => 10,
            Crop::Grapes => 11,
            Crop::Mango => 12,
            Crop::Banana => 13,
            Crop::Pomegranate => 14,
            Crop::Lentil => 15,
            Crop::Blackgram => 16,
            Crop::Mungbean => 17,
            Crop::Mothbeans => 18,
            Crop::Pigeonpeas => 19,
            Crop::Kidneybeans => 20,
            Crop::Chickpea => 21,
            Crop::Coffee => 22,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Crop::Rice => "Rice",
            Crop::Maize => "Maize",
            Crop::Jute => "Jute",
            Crop::Cotton => "Cotton",
            Crop::Coconut => "Coconut",
            Crop::Papaya => "Papaya",
            Crop::Orange => "Orange",
            Crop::Apple => "Apple",
            Crop::Muskmelon => "Muskmelon",
            Crop::Watermelon => "Watermelon",
            Crop::Grapes => "Grapes",
            Crop::Mango => "Mango",
            Crop::Banana => "Banana",
            Crop::Pomegranate => "Pomegranate",
            Crop::Lentil => "Lentil",
            Crop::Blackgram => "Blackgram",
            Crop::Mungbean => "Mungbean",
            Crop::Mothbeans => "Mothbeans",
            Crop::Pigeonpeas => "Pigeonpeas",
            Crop::Kidneybeans => "Kidneybeans",
            Crop::Chickpea => "Chickpea",
            Crop::Coffee => "Coffee",
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
