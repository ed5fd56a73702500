//! Deterministic customer name generation using a curated name list.
//!
//! One dictionary serves both name positions: first and last names are
//! independent draws from the same list. All generation is deterministic
//! (same RNG seed = same names).

use crate::rng::StreamRng;

/// Deterministic name generator using a curated name list
pub struct NameGenerator;

impl NameGenerator {
    /// Draw one name uniformly from the dictionary
    pub fn generate_name(rng: &mut StreamRng) -> &'static str {
        let names = Self::names();
        let index = rng.next_u64_below(names.len() as u64) as usize;
        names[index]
    }

    /// Curated list of 200 names (diverse, realistic)
    fn names() -> &'static [&'static str] {
        &[
            "Aaliyah", "Aaron", "Adriana", "Ahmed", "Aiko", "Aisha", "Alejandro", "Alexis",
            "Alice", "Amara", "Amelia", "Amir", "Ana", "Anders", "Andrea", "Anika",
            "Anton", "Aria", "Arjun", "Asha", "Astrid", "Aurora", "Benjamin", "Bianca",
            "Bodhi", "Boris", "Brianna", "Bruno", "Camila", "Carlos", "Carmen", "Caspian",
            "Cecilia", "Chiara", "Chloe", "Cyrus", "Dahlia", "Dakota", "Dalia", "Damian",
            "Daniela", "Dante", "Daria", "Declan", "Delia", "Dmitri", "Eamon", "Eleanor",
            "Elena", "Eli", "Elias", "Elif", "Emery", "Emil", "Emily", "Enzo",
            "Esme", "Esteban", "Ezra", "Farah", "Felix", "Fiona", "Franco", "Freya",
            "Gabriel", "Gemma", "Giselle", "Grant", "Greta", "Gustavo", "Hana", "Harlow",
            "Hassan", "Hazel", "Hiro", "Hugo", "Ibrahim", "Idris", "Imani", "Indira",
            "Ines", "Ingrid", "Irene", "Isaac", "Isla", "Ivan", "Jade", "Jasper",
            "Javier", "Joe", "Jonas", "Jude", "Julia", "Juniper", "Kai", "Kamala",
            "Kenji", "Kiara", "Kieran", "Lars", "Leila", "Lena", "Leo", "Levi",
            "Liam", "Lila", "Linnea", "Lorenzo", "Lucia", "Luka", "Luna", "Mabel",
            "Maeve", "Magnus", "Malik", "Mara", "Marcel", "Margot", "Mariam", "Mateo",
            "Maya", "Mei", "Micah", "Mila", "Milan", "Mira", "Miriam", "Mohammed",
            "Nadia", "Naomi", "Nash", "Natalia", "Nico", "Nikolai", "Nina", "Noor",
            "Nora", "Oberon", "Octavia", "Olive", "Omar", "Ophelia", "Orion", "Oscar",
            "Paloma", "Paulo", "Penelope", "Petra", "Phoenix", "Priya", "Quentin", "Quinn",
            "Rafael", "Raina", "Ramona", "Rania", "Ravi", "Remy", "Renata", "Rhea",
            "Rocco", "Rohan", "Romy", "Rosa", "Ruben", "Sadie", "Salma", "Samir",
            "Sana", "Santiago", "Sasha", "Selena", "Silas", "Simone", "Sofia", "Soren",
            "Stella", "Suki", "Tamar", "Tariq", "Tess", "Thea", "Theo", "Tomas",
            "Uma", "Valentina", "Vera", "Viktor", "Vivienne", "Wren", "Xavier", "Yara",
            "Yasmin", "Yuki", "Zara", "Zayn", "Zelda", "Zoe", "Zora", "Zuri",
        ]
    }
}
