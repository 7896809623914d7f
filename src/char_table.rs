//! Built-in transliteration data.
//!
//! Latin letters with diacritics map to their base letter, ligatures expand to
//! their component letters, and Greek and Cyrillic letters map to a Latin
//! transliteration. Characters outside these tables pass through unchanged.

/// Latin-1 Supplement, Latin Extended-A/B and Latin Extended Additional.
pub(crate) const LATIN: &[(char, &str)] = &[
    ('À', "A"), ('Á', "A"), ('Â', "A"), ('Ã', "A"), ('Ä', "A"), ('Å', "A"),
    ('Æ', "AE"), ('Ç', "C"), ('È', "E"), ('É', "E"), ('Ê', "E"), ('Ë', "E"),
    ('Ì', "I"), ('Í', "I"), ('Î', "I"), ('Ï', "I"), ('Ð', "D"), ('Ñ', "N"),
    ('Ò', "O"), ('Ó', "O"), ('Ô', "O"), ('Õ', "O"), ('Ö', "O"), ('Ø', "O"),
    ('Ù', "U"), ('Ú', "U"), ('Û', "U"), ('Ü', "U"), ('Ý', "Y"), ('Þ', "TH"),
    ('ß', "ss"), ('à', "a"), ('á', "a"), ('â', "a"), ('ã', "a"), ('ä', "a"),
    ('å', "a"), ('æ', "ae"), ('ç', "c"), ('è', "e"), ('é', "e"), ('ê', "e"),
    ('ë', "e"), ('ì', "i"), ('í', "i"), ('î', "i"), ('ï', "i"), ('ð', "d"),
    ('ñ', "n"), ('ò', "o"), ('ó', "o"), ('ô', "o"), ('õ', "o"), ('ö', "o"),
    ('ø', "o"), ('ù', "u"), ('ú', "u"), ('û', "u"), ('ü', "u"), ('ý', "y"),
    ('þ', "th"), ('ÿ', "y"), ('Ā', "A"), ('ā', "a"), ('Ă', "A"), ('ă', "a"),
    ('Ą', "A"), ('ą', "a"), ('Ć', "C"), ('ć', "c"), ('Ĉ', "C"), ('ĉ', "c"),
    ('Ċ', "C"), ('ċ', "c"), ('Č', "C"), ('č', "c"), ('Ď', "D"), ('ď', "d"),
    ('Đ', "D"), ('đ', "d"), ('Ē', "E"), ('ē', "e"), ('Ĕ', "E"), ('ĕ', "e"),
    ('Ė', "E"), ('ė', "e"), ('Ę', "E"), ('ę', "e"), ('Ě', "E"), ('ě', "e"),
    ('Ĝ', "G"), ('ĝ', "g"), ('Ğ', "G"), ('ğ', "g"), ('Ġ', "G"), ('ġ', "g"),
    ('Ģ', "G"), ('ģ', "g"), ('Ĥ', "H"), ('ĥ', "h"), ('Ħ', "H"), ('ħ', "h"),
    ('Ĩ', "I"), ('ĩ', "i"), ('Ī', "I"), ('ī', "i"), ('Ĭ', "I"), ('ĭ', "i"),
    ('Į', "I"), ('į', "i"), ('İ', "I"), ('ı', "i"), ('Ĳ', "IJ"), ('ĳ', "ij"),
    ('Ĵ', "J"), ('ĵ', "j"), ('Ķ', "K"), ('ķ', "k"), ('ĸ', "k"), ('Ĺ', "L"),
    ('ĺ', "l"), ('Ļ', "L"), ('ļ', "l"), ('Ľ', "L"), ('ľ', "l"), ('Ŀ', "L"),
    ('ŀ', "l"), ('Ł', "L"), ('ł', "l"), ('Ń', "N"), ('ń', "n"), ('Ņ', "N"),
    ('ņ', "n"), ('Ň', "N"), ('ň', "n"), ('Ŋ', "N"), ('ŋ', "n"), ('Ō', "O"),
    ('ō', "o"), ('Ŏ', "O"), ('ŏ', "o"), ('Ő', "O"), ('ő', "o"), ('Œ', "OE"),
    ('œ', "oe"), ('Ŕ', "R"), ('ŕ', "r"), ('Ŗ', "R"), ('ŗ', "r"), ('Ř', "R"),
    ('ř', "r"), ('Ś', "S"), ('ś', "s"), ('Ŝ', "S"), ('ŝ', "s"), ('Ş', "S"),
    ('ş', "s"), ('Š', "S"), ('š', "s"), ('Ţ', "T"), ('ţ', "t"), ('Ť', "T"),
    ('ť', "t"), ('Ŧ', "T"), ('ŧ', "t"), ('Ũ', "U"), ('ũ', "u"), ('Ū', "U"),
    ('ū', "u"), ('Ŭ', "U"), ('ŭ', "u"), ('Ů', "U"), ('ů', "u"), ('Ű', "U"),
    ('ű', "u"), ('Ų', "U"), ('ų', "u"), ('Ŵ', "W"), ('ŵ', "w"), ('Ŷ', "Y"),
    ('ŷ', "y"), ('Ÿ', "Y"), ('Ź', "Z"), ('ź', "z"), ('Ż', "Z"), ('ż', "z"),
    ('Ž', "Z"), ('ž', "z"), ('ſ', "s"), ('ƀ', "b"), ('Ɖ', "D"), ('ƒ', "f"),
    ('Ɨ', "I"), ('ƚ', "l"), ('Ơ', "O"), ('ơ', "o"), ('Ư', "U"), ('ư', "u"),
    ('Ƶ', "Z"), ('ƶ', "z"), ('Ǆ', "DZ"), ('ǅ', "Dz"), ('ǆ', "dz"), ('Ǉ', "LJ"),
    ('ǈ', "Lj"), ('ǉ', "lj"), ('Ǌ', "NJ"), ('ǋ', "Nj"), ('ǌ', "nj"), ('Ǎ', "A"),
    ('ǎ', "a"), ('Ǐ', "I"), ('ǐ', "i"), ('Ǒ', "O"), ('ǒ', "o"), ('Ǔ', "U"),
    ('ǔ', "u"), ('Ǖ', "U"), ('ǖ', "u"), ('Ǘ', "U"), ('ǘ', "u"), ('Ǚ', "U"),
    ('ǚ', "u"), ('Ǜ', "U"), ('ǜ', "u"), ('Ǟ', "A"), ('ǟ', "a"), ('Ǡ', "A"),
    ('ǡ', "a"), ('Ǣ', "AE"), ('ǣ', "ae"), ('Ǧ', "G"), ('ǧ', "g"), ('Ǩ', "K"),
    ('ǩ', "k"), ('Ǫ', "O"), ('ǫ', "o"), ('Ǭ', "O"), ('ǭ', "o"), ('ǰ', "j"),
    ('Ǳ', "DZ"), ('ǲ', "Dz"), ('ǳ', "dz"), ('Ǵ', "G"), ('ǵ', "g"), ('Ǹ', "N"),
    ('ǹ', "n"), ('Ǻ', "A"), ('ǻ', "a"), ('Ǽ', "AE"), ('ǽ', "ae"), ('Ǿ', "O"),
    ('ǿ', "o"), ('Ȁ', "A"), ('ȁ', "a"), ('Ȃ', "A"), ('ȃ', "a"), ('Ȅ', "E"),
    ('ȅ', "e"), ('Ȇ', "E"), ('ȇ', "e"), ('Ȉ', "I"), ('ȉ', "i"), ('Ȋ', "I"),
    ('ȋ', "i"), ('Ȍ', "O"), ('ȍ', "o"), ('Ȏ', "O"), ('ȏ', "o"), ('Ȑ', "R"),
    ('ȑ', "r"), ('Ȓ', "R"), ('ȓ', "r"), ('Ȕ', "U"), ('ȕ', "u"), ('Ȗ', "U"),
    ('ȗ', "u"), ('Ș', "S"), ('ș', "s"), ('Ț', "T"), ('ț', "t"), ('Ȟ', "H"),
    ('ȟ', "h"), ('Ȧ', "A"), ('ȧ', "a"), ('Ȩ', "E"), ('ȩ', "e"), ('Ȫ', "O"),
    ('ȫ', "o"), ('Ȭ', "O"), ('ȭ', "o"), ('Ȯ', "O"), ('ȯ', "o"), ('Ȱ', "O"),
    ('ȱ', "o"), ('Ȳ', "Y"), ('ȳ', "y"), ('Ƚ', "L"), ('Ƀ', "B"), ('Ɍ', "R"),
    ('ɍ', "r"), ('Ɏ', "Y"), ('ɏ', "y"), ('Ḁ', "A"), ('ḁ', "a"), ('Ḃ', "B"),
    ('ḃ', "b"), ('Ḅ', "B"), ('ḅ', "b"), ('Ḇ', "B"), ('ḇ', "b"), ('Ḉ', "C"),
    ('ḉ', "c"), ('Ḋ', "D"), ('ḋ', "d"), ('Ḍ', "D"), ('ḍ', "d"), ('Ḏ', "D"),
    ('ḏ', "d"), ('Ḑ', "D"), ('ḑ', "d"), ('Ḓ', "D"), ('ḓ', "d"), ('Ḕ', "E"),
    ('ḕ', "e"), ('Ḗ', "E"), ('ḗ', "e"), ('Ḙ', "E"), ('ḙ', "e"), ('Ḛ', "E"),
    ('ḛ', "e"), ('Ḝ', "E"), ('ḝ', "e"), ('Ḟ', "F"), ('ḟ', "f"), ('Ḡ', "G"),
    ('ḡ', "g"), ('Ḣ', "H"), ('ḣ', "h"), ('Ḥ', "H"), ('ḥ', "h"), ('Ḧ', "H"),
    ('ḧ', "h"), ('Ḩ', "H"), ('ḩ', "h"), ('Ḫ', "H"), ('ḫ', "h"), ('Ḭ', "I"),
    ('ḭ', "i"), ('Ḯ', "I"), ('ḯ', "i"), ('Ḱ', "K"), ('ḱ', "k"), ('Ḳ', "K"),
    ('ḳ', "k"), ('Ḵ', "K"), ('ḵ', "k"), ('Ḷ', "L"), ('ḷ', "l"), ('Ḹ', "L"),
    ('ḹ', "l"), ('Ḻ', "L"), ('ḻ', "l"), ('Ḽ', "L"), ('ḽ', "l"), ('Ḿ', "M"),
    ('ḿ', "m"), ('Ṁ', "M"), ('ṁ', "m"), ('Ṃ', "M"), ('ṃ', "m"), ('Ṅ', "N"),
    ('ṅ', "n"), ('Ṇ', "N"), ('ṇ', "n"), ('Ṉ', "N"), ('ṉ', "n"), ('Ṋ', "N"),
    ('ṋ', "n"), ('Ṍ', "O"), ('ṍ', "o"), ('Ṏ', "O"), ('ṏ', "o"), ('Ṑ', "O"),
    ('ṑ', "o"), ('Ṓ', "O"), ('ṓ', "o"), ('Ṕ', "P"), ('ṕ', "p"), ('Ṗ', "P"),
    ('ṗ', "p"), ('Ṙ', "R"), ('ṙ', "r"), ('Ṛ', "R"), ('ṛ', "r"), ('Ṝ', "R"),
    ('ṝ', "r"), ('Ṟ', "R"), ('ṟ', "r"), ('Ṡ', "S"), ('ṡ', "s"), ('Ṣ', "S"),
    ('ṣ', "s"), ('Ṥ', "S"), ('ṥ', "s"), ('Ṧ', "S"), ('ṧ', "s"), ('Ṩ', "S"),
    ('ṩ', "s"), ('Ṫ', "T"), ('ṫ', "t"), ('Ṭ', "T"), ('ṭ', "t"), ('Ṯ', "T"),
    ('ṯ', "t"), ('Ṱ', "T"), ('ṱ', "t"), ('Ṳ', "U"), ('ṳ', "u"), ('Ṵ', "U"),
    ('ṵ', "u"), ('Ṷ', "U"), ('ṷ', "u"), ('Ṹ', "U"), ('ṹ', "u"), ('Ṻ', "U"),
    ('ṻ', "u"), ('Ṽ', "V"), ('ṽ', "v"), ('Ṿ', "V"), ('ṿ', "v"), ('Ẁ', "W"),
    ('ẁ', "w"), ('Ẃ', "W"), ('ẃ', "w"), ('Ẅ', "W"), ('ẅ', "w"), ('Ẇ', "W"),
    ('ẇ', "w"), ('Ẉ', "W"), ('ẉ', "w"), ('Ẋ', "X"), ('ẋ', "x"), ('Ẍ', "X"),
    ('ẍ', "x"), ('Ẏ', "Y"), ('ẏ', "y"), ('Ẑ', "Z"), ('ẑ', "z"), ('Ẓ', "Z"),
    ('ẓ', "z"), ('Ẕ', "Z"), ('ẕ', "z"), ('ẖ', "h"), ('ẗ', "t"), ('ẘ', "w"),
    ('ẙ', "y"), ('ẞ', "SS"), ('Ạ', "A"), ('ạ', "a"), ('Ả', "A"), ('ả', "a"),
    ('Ấ', "A"), ('ấ', "a"), ('Ầ', "A"), ('ầ', "a"), ('Ẩ', "A"), ('ẩ', "a"),
    ('Ẫ', "A"), ('ẫ', "a"), ('Ậ', "A"), ('ậ', "a"), ('Ắ', "A"), ('ắ', "a"),
    ('Ằ', "A"), ('ằ', "a"), ('Ẳ', "A"), ('ẳ', "a"), ('Ẵ', "A"), ('ẵ', "a"),
    ('Ặ', "A"), ('ặ', "a"), ('Ẹ', "E"), ('ẹ', "e"), ('Ẻ', "E"), ('ẻ', "e"),
    ('Ẽ', "E"), ('ẽ', "e"), ('Ế', "E"), ('ế', "e"), ('Ề', "E"), ('ề', "e"),
    ('Ể', "E"), ('ể', "e"), ('Ễ', "E"), ('ễ', "e"), ('Ệ', "E"), ('ệ', "e"),
    ('Ỉ', "I"), ('ỉ', "i"), ('Ị', "I"), ('ị', "i"), ('Ọ', "O"), ('ọ', "o"),
    ('Ỏ', "O"), ('ỏ', "o"), ('Ố', "O"), ('ố', "o"), ('Ồ', "O"), ('ồ', "o"),
    ('Ổ', "O"), ('ổ', "o"), ('Ỗ', "O"), ('ỗ', "o"), ('Ộ', "O"), ('ộ', "o"),
    ('Ớ', "O"), ('ớ', "o"), ('Ờ', "O"), ('ờ', "o"), ('Ở', "O"), ('ở', "o"),
    ('Ỡ', "O"), ('ỡ', "o"), ('Ợ', "O"), ('ợ', "o"), ('Ụ', "U"), ('ụ', "u"),
    ('Ủ', "U"), ('ủ', "u"), ('Ứ', "U"), ('ứ', "u"), ('Ừ', "U"), ('ừ', "u"),
    ('Ử', "U"), ('ử', "u"), ('Ữ', "U"), ('ữ', "u"), ('Ự', "U"), ('ự', "u"),
    ('Ỳ', "Y"), ('ỳ', "y"), ('Ỵ', "Y"), ('ỵ', "y"), ('Ỷ', "Y"), ('ỷ', "y"),
    ('Ỹ', "Y"), ('ỹ', "y"), ('ɖ', "d"), ('ɨ', "i"),
];

/// Modern Greek, including tonos and dialytika forms.
pub(crate) const GREEK: &[(char, &str)] = &[
    ('α', "a"), ('β', "b"), ('γ', "g"), ('δ', "d"), ('ε', "e"), ('ζ', "z"),
    ('η', "h"), ('θ', "8"), ('ι', "i"), ('κ', "k"), ('λ', "l"), ('μ', "m"),
    ('ν', "n"), ('ξ', "3"), ('ο', "o"), ('π', "p"), ('ρ', "r"), ('σ', "s"),
    ('τ', "t"), ('υ', "y"), ('φ', "f"), ('χ', "x"), ('ψ', "ps"), ('ω', "w"),
    ('ά', "a"), ('έ', "e"), ('ί', "i"), ('ό', "o"), ('ύ', "y"), ('ή', "h"),
    ('ώ', "w"), ('ς', "s"), ('ϊ', "i"), ('ΰ', "y"), ('ϋ', "y"), ('ΐ', "i"),
    ('Α', "A"), ('Β', "B"), ('Γ', "G"), ('Δ', "D"), ('Ε', "E"), ('Ζ', "Z"),
    ('Η', "H"), ('Θ', "8"), ('Ι', "I"), ('Κ', "K"), ('Λ', "L"), ('Μ', "M"),
    ('Ν', "N"), ('Ξ', "3"), ('Ο', "O"), ('Π', "P"), ('Ρ', "R"), ('Σ', "S"),
    ('Τ', "T"), ('Υ', "Y"), ('Φ', "F"), ('Χ', "X"), ('Ψ', "PS"), ('Ω', "W"),
    ('Ά', "A"), ('Έ', "E"), ('Ί', "I"), ('Ό', "O"), ('Ύ', "Y"), ('Ή', "H"),
    ('Ώ', "W"), ('Ϊ', "I"), ('Ϋ', "Y"),
];

/// Russian and Ukrainian Cyrillic.
pub(crate) const CYRILLIC: &[(char, &str)] = &[
    ('а', "a"), ('б', "b"), ('в', "v"), ('г', "g"), ('д', "d"), ('е', "e"),
    ('ё', "yo"), ('ж', "zh"), ('з', "z"), ('и', "i"), ('й', "j"), ('к', "k"),
    ('л', "l"), ('м', "m"), ('н', "n"), ('о', "o"), ('п', "p"), ('р', "r"),
    ('с', "s"), ('т', "t"), ('у', "u"), ('ф', "f"), ('х', "h"), ('ц', "c"),
    ('ч', "ch"), ('ш', "sh"), ('щ', "sh"), ('ъ', "u"), ('ы', "y"), ('ь', ""),
    ('э', "e"), ('ю', "yu"), ('я', "ya"), ('А', "A"), ('Б', "B"), ('В', "V"),
    ('Г', "G"), ('Д', "D"), ('Е', "E"), ('Ё', "Yo"), ('Ж', "Zh"), ('З', "Z"),
    ('И', "I"), ('Й', "J"), ('К', "K"), ('Л', "L"), ('М', "M"), ('Н', "N"),
    ('О', "O"), ('П', "P"), ('Р', "R"), ('С', "S"), ('Т', "T"), ('У', "U"),
    ('Ф', "F"), ('Х', "H"), ('Ц', "C"), ('Ч', "Ch"), ('Ш', "Sh"), ('Щ', "Sh"),
    ('Ъ', "U"), ('Ы', "Y"), ('Ь', ""), ('Э', "E"), ('Ю', "Yu"), ('Я', "Ya"),
    ('Є', "Ye"), ('І', "I"), ('Ї', "Yi"), ('Ґ', "G"), ('є', "ye"), ('і', "i"),
    ('ї', "yi"), ('ґ', "g"),
];
