//! Production vocabularies tuned against New Mexico committee transcripts.

pub const STOPWORDS: &[&str] = &[
    "the", "and", "or", "but", "for", "with", "from", "to", "of", "in", "on", "at", "by", "is",
    "are", "was", "were", "be", "been", "has", "have", "had", "do", "does", "did", "will",
    "would", "shall", "can", "could", "may", "might", "must", "this", "that", "these", "those",
    "which", "who", "what", "where", "when", "why", "how", "all", "each", "every", "both", "few",
    "more", "most", "other", "some", "such", "no", "not", "only", "own", "same", "so", "than",
    "too", "very", "just", "now", "then", "here", "there", "out", "up", "down", "off", "over",
    "under", "again", "further", "once", "new", "about", "after", "also", "an", "any", "because",
    "before", "being", "between", "during", "even", "first", "get", "give", "into", "it", "its",
    "make", "many", "me", "my", "our", "said", "see", "she", "should", "since", "take", "their",
    "them", "they", "through", "two", "us", "use", "want", "way", "we", "well", "while", "work",
    "year", "you", "your",
];

pub const DOMAIN_WORDS: &[&str] = &[
    // procedure
    "committee", "chairman", "chairwoman", "chair", "vice", "member", "members", "meeting",
    "session", "hearing", "testimony", "testify", "witness", "amendment", "motion", "vote",
    "votes", "voting", "pass", "passed", "fail", "failed", "approve", "approved", "adopt",
    "adopted", "reject", "rejected", "bill", "bills", "resolution", "legislation", "statute",
    "section", "subsection", "paragraph", "page", "line",
    // standalone titles
    "representative", "senator", "mister", "doctor", "professor", "reverend", "secretary",
    "governor", "mayor", "director",
    // calendar
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "january",
    "february", "march", "april", "may", "june", "july", "august", "september", "october",
    "november", "december", "morning", "afternoon", "evening", "today", "yesterday", "tomorrow",
    // caption artifacts
    "inaudible", "indiscernible", "crosstalk", "applause", "laughter", "pause", "break",
    "recess", "adjourn", "adjourned",
    "thank", "thanks", "please", "sorry", "excuse", "question", "questions", "answer",
    "answers", "comment", "comments", "statement", "statements", "record", "minutes",
    // spelled-out numbers
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "twenty", "thirty", "forty", "fifty",
    "hundred", "thousand",
    "house", "senate", "floor", "chamber", "quorum", "present",
    // pronouns
    "he", "she", "him", "her", "his", "hers", "them", "their", "we", "us", "our", "ours", "i",
    "me", "my", "mine",
    "yes", "no", "yeah", "yep", "nope", "okay", "ok", "if", "when", "while", "until", "unless",
    "because", "since", "although", "though", "however", "therefore", "thus", "hence",
    "meanwhile", "otherwise", "also", "too", "either", "neither", "both", "new", "old", "next",
    "last", "first", "second", "same", "different", "other", "another", "each", "every", "said",
    "says", "saying", "told", "asked", "made", "make", "makes", "making", "ready", "done",
    "finished", "complete", "speaker", "designate", "ranking",
];

pub const TITLES: &[&str] = &[
    "Representative",
    "Rep",
    "Senator",
    "Sen",
    "Chairman",
    "Chairwoman",
    "Chair",
    "Mr",
    "Ms",
    "Mrs",
    "Miss",
    "Dr",
    "Doctor",
    "Governor",
    "Secretary",
    "Director",
    "Commissioner",
];

pub const TITLE_WORDS: &[&str] = &[
    "chairman", "chairwoman", "chair", "representative", "senator", "governor", "secretary",
    "director", "commissioner", "mister", "mr", "ms", "mrs", "miss", "madam", "dr", "doctor",
];

pub const COMMON_WORDS: &[&str] = &[
    "he", "she", "him", "her", "his", "hers", "them", "their", "we", "us", "our", "ours", "i",
    "me", "my", "mine", "yes", "no", "yeah", "yep", "nope", "okay", "ok", "so", "if", "when",
    "while", "until", "unless", "yesterday", "today", "tomorrow", "new", "old", "next", "last",
    "said", "says", "asked", "told", "made", "make", "ready", "done", "speaker", "designate",
    "ranking", "but", "there", "here", "hi", "hello", "hey", "good", "great", "fine", "well",
    "very",
];

pub const CONNECTIVES: &[&str] = &[
    "and", "or", "the", "of", "to", "in", "on", "at", "by", "for", "with", "from", "that", "this",
];

pub const START_WORDS: &[&str] = &[
    "thank", "and", "or", "the", "of", "to", "that", "this", "they", "it", "is", "are", "was",
    "were", "can", "will", "would",
];

pub const END_WORDS: &[&str] = &[
    "and", "or", "the", "of", "to", "in", "on", "at", "by", "for", "with", "from", "thank",
    "members", "representative", "chair", "chairman", "committee", "up", "down", "out", "off",
    "as", "said", "asked", "did", "was", "were", "is", "are", "has", "had", "have",
];

pub const PHRASES: &[&str] = &[
    "thank you",
    "of the",
    "to the",
    "in the",
    "on the",
    "at the",
    "for the",
    "and the",
    "from the",
    "with the",
    "by the",
    "mr chair",
    "madam chair",
    "mr chairman",
    "madam chairman",
    "chair thank you",
    "chairman thank you",
    "mr thank",
    "chair members",
    "chairman members",
    "chair members of",
    "chairman members of",
    "chairman thank you very",
    "as you",
    "you can",
    "you have",
    "you recall",
];

pub const TAIL_PHRASES: &[&str] = &[
    // two-word tails
    "thank you",
    "so now",
    "next we",
    "please thank",
    "you talked",
    "you can",
    "you have",
    "you recall",
    "that goes",
    "will oversee",
    "the establish",
    // three-word tails
    "are you ready",
    "can you hear",
    "do you want",
    "did you want",
    "would you like",
    "if you will",
    "if you could",
    "thank you very",
    "thank you madame",
];
