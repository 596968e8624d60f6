use rand::seq::SliceRandom;
use rand::Rng;

pub const QUOTES: &[&str] = &[
    "The greatest glory in living lies not in never falling, but in rising every time we fall. – Nelson Mandela",
    "The way to get started is to quit talking and begin doing. – Walt Disney",
    "Your time is limited, don't waste it living someone else's life. – Steve Jobs",
    "If life were predictable it would cease to be life, and be without flavor. – Eleanor Roosevelt",
    "Spread love everywhere you go. Let no one ever come to you without leaving happier. – Mother Teresa",
    "When you reach the end of your rope, tie a knot in it and hang on. – Franklin D. Roosevelt",
    "Always remember that you are absolutely unique. Just like everyone else. – Margaret Mead",
    "The future belongs to those who believe in the beauty of their dreams. – Eleanor Roosevelt",
    "You will face many defeats in life, but never let yourself be defeated. – Maya Angelou",
    "In the middle of difficulty lies opportunity. – Albert Einstein",
];

pub fn random_quote<R>(rng: &mut R) -> &'static str
where
    R: Rng + ?Sized,
{
    QUOTES.choose(rng).copied().unwrap_or_default()
}
