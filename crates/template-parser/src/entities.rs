//! Named character reference table.
//!
//! The full HTML named character reference set. Entries flagged as legacy
//! may also appear without their trailing semicolon. A few references decode
//! to two code points, so values are strings.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// A successful named reference match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedMatch {
    /// Bytes consumed after the `&`, including the `;` if present.
    pub len: usize,
    /// The decoded text.
    pub value: &'static str,
    /// Whether the match ended with `;`.
    pub terminated: bool,
}

const MAX_NAME_LEN: usize = 31;

static NAMED_REFERENCES: &[(&str, &str, bool)] = &[
    ("AElig", "\u{C6}", true),
    ("AMP", "\u{26}", true),
    ("Aacute", "\u{C1}", true),
    ("Abreve", "\u{102}", false),
    ("Acirc", "\u{C2}", true),
    ("Acy", "\u{410}", false),
    ("Afr", "\u{1D504}", false),
    ("Agrave", "\u{C0}", true),
    ("Alpha", "\u{391}", false),
    ("Amacr", "\u{100}", false),
    ("And", "\u{2A53}", false),
    ("Aogon", "\u{104}", false),
    ("Aopf", "\u{1D538}", false),
    ("ApplyFunction", "\u{2061}", false),
    ("Aring", "\u{C5}", true),
    ("Ascr", "\u{1D49C}", false),
    ("Assign", "\u{2254}", false),
    ("Atilde", "\u{C3}", true),
    ("Auml", "\u{C4}", true),
    ("Backslash", "\u{2216}", false),
    ("Barv", "\u{2AE7}", false),
    ("Barwed", "\u{2306}", false),
    ("Bcy", "\u{411}", false),
    ("Because", "\u{2235}", false),
    ("Bernoullis", "\u{212C}", false),
    ("Beta", "\u{392}", false),
    ("Bfr", "\u{1D505}", false),
    ("Bopf", "\u{1D539}", false),
    ("Breve", "\u{2D8}", false),
    ("Bscr", "\u{212C}", false),
    ("Bumpeq", "\u{224E}", false),
    ("CHcy", "\u{427}", false),
    ("COPY", "\u{A9}", true),
    ("Cacute", "\u{106}", false),
    ("Cap", "\u{22D2}", false),
    ("CapitalDifferentialD", "\u{2145}", false),
    ("Cayleys", "\u{212D}", false),
    ("Ccaron", "\u{10C}", false),
    ("Ccedil", "\u{C7}", true),
    ("Ccirc", "\u{108}", false),
    ("Cconint", "\u{2230}", false),
    ("Cdot", "\u{10A}", false),
    ("Cedilla", "\u{B8}", false),
    ("CenterDot", "\u{B7}", false),
    ("Cfr", "\u{212D}", false),
    ("Chi", "\u{3A7}", false),
    ("CircleDot", "\u{2299}", false),
    ("CircleMinus", "\u{2296}", false),
    ("CirclePlus", "\u{2295}", false),
    ("CircleTimes", "\u{2297}", false),
    ("ClockwiseContourIntegral", "\u{2232}", false),
    ("CloseCurlyDoubleQuote", "\u{201D}", false),
    ("CloseCurlyQuote", "\u{2019}", false),
    ("Colon", "\u{2237}", false),
    ("Colone", "\u{2A74}", false),
    ("Congruent", "\u{2261}", false),
    ("Conint", "\u{222F}", false),
    ("ContourIntegral", "\u{222E}", false),
    ("Copf", "\u{2102}", false),
    ("Coproduct", "\u{2210}", false),
    ("CounterClockwiseContourIntegral", "\u{2233}", false),
    ("Cross", "\u{2A2F}", false),
    ("Cscr", "\u{1D49E}", false),
    ("Cup", "\u{22D3}", false),
    ("CupCap", "\u{224D}", false),
    ("DD", "\u{2145}", false),
    ("DDotrahd", "\u{2911}", false),
    ("DJcy", "\u{402}", false),
    ("DScy", "\u{405}", false),
    ("DZcy", "\u{40F}", false),
    ("Dagger", "\u{2021}", false),
    ("Darr", "\u{21A1}", false),
    ("Dashv", "\u{2AE4}", false),
    ("Dcaron", "\u{10E}", false),
    ("Dcy", "\u{414}", false),
    ("Del", "\u{2207}", false),
    ("Delta", "\u{394}", false),
    ("Dfr", "\u{1D507}", false),
    ("DiacriticalAcute", "\u{B4}", false),
    ("DiacriticalDot", "\u{2D9}", false),
    ("DiacriticalDoubleAcute", "\u{2DD}", false),
    ("DiacriticalGrave", "\u{60}", false),
    ("DiacriticalTilde", "\u{2DC}", false),
    ("Diamond", "\u{22C4}", false),
    ("DifferentialD", "\u{2146}", false),
    ("Dopf", "\u{1D53B}", false),
    ("Dot", "\u{A8}", false),
    ("DotDot", "\u{20DC}", false),
    ("DotEqual", "\u{2250}", false),
    ("DoubleContourIntegral", "\u{222F}", false),
    ("DoubleDot", "\u{A8}", false),
    ("DoubleDownArrow", "\u{21D3}", false),
    ("DoubleLeftArrow", "\u{21D0}", false),
    ("DoubleLeftRightArrow", "\u{21D4}", false),
    ("DoubleLeftTee", "\u{2AE4}", false),
    ("DoubleLongLeftArrow", "\u{27F8}", false),
    ("DoubleLongLeftRightArrow", "\u{27FA}", false),
    ("DoubleLongRightArrow", "\u{27F9}", false),
    ("DoubleRightArrow", "\u{21D2}", false),
    ("DoubleRightTee", "\u{22A8}", false),
    ("DoubleUpArrow", "\u{21D1}", false),
    ("DoubleUpDownArrow", "\u{21D5}", false),
    ("DoubleVerticalBar", "\u{2225}", false),
    ("DownArrow", "\u{2193}", false),
    ("DownArrowBar", "\u{2913}", false),
    ("DownArrowUpArrow", "\u{21F5}", false),
    ("DownBreve", "\u{311}", false),
    ("DownLeftRightVector", "\u{2950}", false),
    ("DownLeftTeeVector", "\u{295E}", false),
    ("DownLeftVector", "\u{21BD}", false),
    ("DownLeftVectorBar", "\u{2956}", false),
    ("DownRightTeeVector", "\u{295F}", false),
    ("DownRightVector", "\u{21C1}", false),
    ("DownRightVectorBar", "\u{2957}", false),
    ("DownTee", "\u{22A4}", false),
    ("DownTeeArrow", "\u{21A7}", false),
    ("Downarrow", "\u{21D3}", false),
    ("Dscr", "\u{1D49F}", false),
    ("Dstrok", "\u{110}", false),
    ("ENG", "\u{14A}", false),
    ("ETH", "\u{D0}", true),
    ("Eacute", "\u{C9}", true),
    ("Ecaron", "\u{11A}", false),
    ("Ecirc", "\u{CA}", true),
    ("Ecy", "\u{42D}", false),
    ("Edot", "\u{116}", false),
    ("Efr", "\u{1D508}", false),
    ("Egrave", "\u{C8}", true),
    ("Element", "\u{2208}", false),
    ("Emacr", "\u{112}", false),
    ("EmptySmallSquare", "\u{25FB}", false),
    ("EmptyVerySmallSquare", "\u{25AB}", false),
    ("Eogon", "\u{118}", false),
    ("Eopf", "\u{1D53C}", false),
    ("Epsilon", "\u{395}", false),
    ("Equal", "\u{2A75}", false),
    ("EqualTilde", "\u{2242}", false),
    ("Equilibrium", "\u{21CC}", false),
    ("Escr", "\u{2130}", false),
    ("Esim", "\u{2A73}", false),
    ("Eta", "\u{397}", false),
    ("Euml", "\u{CB}", true),
    ("Exists", "\u{2203}", false),
    ("ExponentialE", "\u{2147}", false),
    ("Fcy", "\u{424}", false),
    ("Ffr", "\u{1D509}", false),
    ("FilledSmallSquare", "\u{25FC}", false),
    ("FilledVerySmallSquare", "\u{25AA}", false),
    ("Fopf", "\u{1D53D}", false),
    ("ForAll", "\u{2200}", false),
    ("Fouriertrf", "\u{2131}", false),
    ("Fscr", "\u{2131}", false),
    ("GJcy", "\u{403}", false),
    ("GT", "\u{3E}", true),
    ("Gamma", "\u{393}", false),
    ("Gammad", "\u{3DC}", false),
    ("Gbreve", "\u{11E}", false),
    ("Gcedil", "\u{122}", false),
    ("Gcirc", "\u{11C}", false),
    ("Gcy", "\u{413}", false),
    ("Gdot", "\u{120}", false),
    ("Gfr", "\u{1D50A}", false),
    ("Gg", "\u{22D9}", false),
    ("Gopf", "\u{1D53E}", false),
    ("GreaterEqual", "\u{2265}", false),
    ("GreaterEqualLess", "\u{22DB}", false),
    ("GreaterFullEqual", "\u{2267}", false),
    ("GreaterGreater", "\u{2AA2}", false),
    ("GreaterLess", "\u{2277}", false),
    ("GreaterSlantEqual", "\u{2A7E}", false),
    ("GreaterTilde", "\u{2273}", false),
    ("Gscr", "\u{1D4A2}", false),
    ("Gt", "\u{226B}", false),
    ("HARDcy", "\u{42A}", false),
    ("Hacek", "\u{2C7}", false),
    ("Hat", "\u{5E}", false),
    ("Hcirc", "\u{124}", false),
    ("Hfr", "\u{210C}", false),
    ("HilbertSpace", "\u{210B}", false),
    ("Hopf", "\u{210D}", false),
    ("HorizontalLine", "\u{2500}", false),
    ("Hscr", "\u{210B}", false),
    ("Hstrok", "\u{126}", false),
    ("HumpDownHump", "\u{224E}", false),
    ("HumpEqual", "\u{224F}", false),
    ("IEcy", "\u{415}", false),
    ("IJlig", "\u{132}", false),
    ("IOcy", "\u{401}", false),
    ("Iacute", "\u{CD}", true),
    ("Icirc", "\u{CE}", true),
    ("Icy", "\u{418}", false),
    ("Idot", "\u{130}", false),
    ("Ifr", "\u{2111}", false),
    ("Igrave", "\u{CC}", true),
    ("Im", "\u{2111}", false),
    ("Imacr", "\u{12A}", false),
    ("ImaginaryI", "\u{2148}", false),
    ("Implies", "\u{21D2}", false),
    ("Int", "\u{222C}", false),
    ("Integral", "\u{222B}", false),
    ("Intersection", "\u{22C2}", false),
    ("InvisibleComma", "\u{2063}", false),
    ("InvisibleTimes", "\u{2062}", false),
    ("Iogon", "\u{12E}", false),
    ("Iopf", "\u{1D540}", false),
    ("Iota", "\u{399}", false),
    ("Iscr", "\u{2110}", false),
    ("Itilde", "\u{128}", false),
    ("Iukcy", "\u{406}", false),
    ("Iuml", "\u{CF}", true),
    ("Jcirc", "\u{134}", false),
    ("Jcy", "\u{419}", false),
    ("Jfr", "\u{1D50D}", false),
    ("Jopf", "\u{1D541}", false),
    ("Jscr", "\u{1D4A5}", false),
    ("Jsercy", "\u{408}", false),
    ("Jukcy", "\u{404}", false),
    ("KHcy", "\u{425}", false),
    ("KJcy", "\u{40C}", false),
    ("Kappa", "\u{39A}", false),
    ("Kcedil", "\u{136}", false),
    ("Kcy", "\u{41A}", false),
    ("Kfr", "\u{1D50E}", false),
    ("Kopf", "\u{1D542}", false),
    ("Kscr", "\u{1D4A6}", false),
    ("LJcy", "\u{409}", false),
    ("LT", "\u{3C}", true),
    ("Lacute", "\u{139}", false),
    ("Lambda", "\u{39B}", false),
    ("Lang", "\u{27EA}", false),
    ("Laplacetrf", "\u{2112}", false),
    ("Larr", "\u{219E}", false),
    ("Lcaron", "\u{13D}", false),
    ("Lcedil", "\u{13B}", false),
    ("Lcy", "\u{41B}", false),
    ("LeftAngleBracket", "\u{27E8}", false),
    ("LeftArrow", "\u{2190}", false),
    ("LeftArrowBar", "\u{21E4}", false),
    ("LeftArrowRightArrow", "\u{21C6}", false),
    ("LeftCeiling", "\u{2308}", false),
    ("LeftDoubleBracket", "\u{27E6}", false),
    ("LeftDownTeeVector", "\u{2961}", false),
    ("LeftDownVector", "\u{21C3}", false),
    ("LeftDownVectorBar", "\u{2959}", false),
    ("LeftFloor", "\u{230A}", false),
    ("LeftRightArrow", "\u{2194}", false),
    ("LeftRightVector", "\u{294E}", false),
    ("LeftTee", "\u{22A3}", false),
    ("LeftTeeArrow", "\u{21A4}", false),
    ("LeftTeeVector", "\u{295A}", false),
    ("LeftTriangle", "\u{22B2}", false),
    ("LeftTriangleBar", "\u{29CF}", false),
    ("LeftTriangleEqual", "\u{22B4}", false),
    ("LeftUpDownVector", "\u{2951}", false),
    ("LeftUpTeeVector", "\u{2960}", false),
    ("LeftUpVector", "\u{21BF}", false),
    ("LeftUpVectorBar", "\u{2958}", false),
    ("LeftVector", "\u{21BC}", false),
    ("LeftVectorBar", "\u{2952}", false),
    ("Leftarrow", "\u{21D0}", false),
    ("Leftrightarrow", "\u{21D4}", false),
    ("LessEqualGreater", "\u{22DA}", false),
    ("LessFullEqual", "\u{2266}", false),
    ("LessGreater", "\u{2276}", false),
    ("LessLess", "\u{2AA1}", false),
    ("LessSlantEqual", "\u{2A7D}", false),
    ("LessTilde", "\u{2272}", false),
    ("Lfr", "\u{1D50F}", false),
    ("Ll", "\u{22D8}", false),
    ("Lleftarrow", "\u{21DA}", false),
    ("Lmidot", "\u{13F}", false),
    ("LongLeftArrow", "\u{27F5}", false),
    ("LongLeftRightArrow", "\u{27F7}", false),
    ("LongRightArrow", "\u{27F6}", false),
    ("Longleftarrow", "\u{27F8}", false),
    ("Longleftrightarrow", "\u{27FA}", false),
    ("Longrightarrow", "\u{27F9}", false),
    ("Lopf", "\u{1D543}", false),
    ("LowerLeftArrow", "\u{2199}", false),
    ("LowerRightArrow", "\u{2198}", false),
    ("Lscr", "\u{2112}", false),
    ("Lsh", "\u{21B0}", false),
    ("Lstrok", "\u{141}", false),
    ("Lt", "\u{226A}", false),
    ("Map", "\u{2905}", false),
    ("Mcy", "\u{41C}", false),
    ("MediumSpace", "\u{205F}", false),
    ("Mellintrf", "\u{2133}", false),
    ("Mfr", "\u{1D510}", false),
    ("MinusPlus", "\u{2213}", false),
    ("Mopf", "\u{1D544}", false),
    ("Mscr", "\u{2133}", false),
    ("Mu", "\u{39C}", false),
    ("NJcy", "\u{40A}", false),
    ("Nacute", "\u{143}", false),
    ("Ncaron", "\u{147}", false),
    ("Ncedil", "\u{145}", false),
    ("Ncy", "\u{41D}", false),
    ("NegativeMediumSpace", "\u{200B}", false),
    ("NegativeThickSpace", "\u{200B}", false),
    ("NegativeThinSpace", "\u{200B}", false),
    ("NegativeVeryThinSpace", "\u{200B}", false),
    ("NestedGreaterGreater", "\u{226B}", false),
    ("NestedLessLess", "\u{226A}", false),
    ("NewLine", "\u{A}", false),
    ("Nfr", "\u{1D511}", false),
    ("NoBreak", "\u{2060}", false),
    ("NonBreakingSpace", "\u{A0}", false),
    ("Nopf", "\u{2115}", false),
    ("Not", "\u{2AEC}", false),
    ("NotCongruent", "\u{2262}", false),
    ("NotCupCap", "\u{226D}", false),
    ("NotDoubleVerticalBar", "\u{2226}", false),
    ("NotElement", "\u{2209}", false),
    ("NotEqual", "\u{2260}", false),
    ("NotEqualTilde", "\u{2242}\u{338}", false),
    ("NotExists", "\u{2204}", false),
    ("NotGreater", "\u{226F}", false),
    ("NotGreaterEqual", "\u{2271}", false),
    ("NotGreaterFullEqual", "\u{2267}\u{338}", false),
    ("NotGreaterGreater", "\u{226B}\u{338}", false),
    ("NotGreaterLess", "\u{2279}", false),
    ("NotGreaterSlantEqual", "\u{2A7E}\u{338}", false),
    ("NotGreaterTilde", "\u{2275}", false),
    ("NotHumpDownHump", "\u{224E}\u{338}", false),
    ("NotHumpEqual", "\u{224F}\u{338}", false),
    ("NotLeftTriangle", "\u{22EA}", false),
    ("NotLeftTriangleBar", "\u{29CF}\u{338}", false),
    ("NotLeftTriangleEqual", "\u{22EC}", false),
    ("NotLess", "\u{226E}", false),
    ("NotLessEqual", "\u{2270}", false),
    ("NotLessGreater", "\u{2278}", false),
    ("NotLessLess", "\u{226A}\u{338}", false),
    ("NotLessSlantEqual", "\u{2A7D}\u{338}", false),
    ("NotLessTilde", "\u{2274}", false),
    ("NotNestedGreaterGreater", "\u{2AA2}\u{338}", false),
    ("NotNestedLessLess", "\u{2AA1}\u{338}", false),
    ("NotPrecedes", "\u{2280}", false),
    ("NotPrecedesEqual", "\u{2AAF}\u{338}", false),
    ("NotPrecedesSlantEqual", "\u{22E0}", false),
    ("NotReverseElement", "\u{220C}", false),
    ("NotRightTriangle", "\u{22EB}", false),
    ("NotRightTriangleBar", "\u{29D0}\u{338}", false),
    ("NotRightTriangleEqual", "\u{22ED}", false),
    ("NotSquareSubset", "\u{228F}\u{338}", false),
    ("NotSquareSubsetEqual", "\u{22E2}", false),
    ("NotSquareSuperset", "\u{2290}\u{338}", false),
    ("NotSquareSupersetEqual", "\u{22E3}", false),
    ("NotSubset", "\u{2282}\u{20D2}", false),
    ("NotSubsetEqual", "\u{2288}", false),
    ("NotSucceeds", "\u{2281}", false),
    ("NotSucceedsEqual", "\u{2AB0}\u{338}", false),
    ("NotSucceedsSlantEqual", "\u{22E1}", false),
    ("NotSucceedsTilde", "\u{227F}\u{338}", false),
    ("NotSuperset", "\u{2283}\u{20D2}", false),
    ("NotSupersetEqual", "\u{2289}", false),
    ("NotTilde", "\u{2241}", false),
    ("NotTildeEqual", "\u{2244}", false),
    ("NotTildeFullEqual", "\u{2247}", false),
    ("NotTildeTilde", "\u{2249}", false),
    ("NotVerticalBar", "\u{2224}", false),
    ("Nscr", "\u{1D4A9}", false),
    ("Ntilde", "\u{D1}", true),
    ("Nu", "\u{39D}", false),
    ("OElig", "\u{152}", false),
    ("Oacute", "\u{D3}", true),
    ("Ocirc", "\u{D4}", true),
    ("Ocy", "\u{41E}", false),
    ("Odblac", "\u{150}", false),
    ("Ofr", "\u{1D512}", false),
    ("Ograve", "\u{D2}", true),
    ("Omacr", "\u{14C}", false),
    ("Omega", "\u{3A9}", false),
    ("Omicron", "\u{39F}", false),
    ("Oopf", "\u{1D546}", false),
    ("OpenCurlyDoubleQuote", "\u{201C}", false),
    ("OpenCurlyQuote", "\u{2018}", false),
    ("Or", "\u{2A54}", false),
    ("Oscr", "\u{1D4AA}", false),
    ("Oslash", "\u{D8}", true),
    ("Otilde", "\u{D5}", true),
    ("Otimes", "\u{2A37}", false),
    ("Ouml", "\u{D6}", true),
    ("OverBar", "\u{203E}", false),
    ("OverBrace", "\u{23DE}", false),
    ("OverBracket", "\u{23B4}", false),
    ("OverParenthesis", "\u{23DC}", false),
    ("PartialD", "\u{2202}", false),
    ("Pcy", "\u{41F}", false),
    ("Pfr", "\u{1D513}", false),
    ("Phi", "\u{3A6}", false),
    ("Pi", "\u{3A0}", false),
    ("PlusMinus", "\u{B1}", false),
    ("Poincareplane", "\u{210C}", false),
    ("Popf", "\u{2119}", false),
    ("Pr", "\u{2ABB}", false),
    ("Precedes", "\u{227A}", false),
    ("PrecedesEqual", "\u{2AAF}", false),
    ("PrecedesSlantEqual", "\u{227C}", false),
    ("PrecedesTilde", "\u{227E}", false),
    ("Prime", "\u{2033}", false),
    ("Product", "\u{220F}", false),
    ("Proportion", "\u{2237}", false),
    ("Proportional", "\u{221D}", false),
    ("Pscr", "\u{1D4AB}", false),
    ("Psi", "\u{3A8}", false),
    ("QUOT", "\u{22}", true),
    ("Qfr", "\u{1D514}", false),
    ("Qopf", "\u{211A}", false),
    ("Qscr", "\u{1D4AC}", false),
    ("RBarr", "\u{2910}", false),
    ("REG", "\u{AE}", true),
    ("Racute", "\u{154}", false),
    ("Rang", "\u{27EB}", false),
    ("Rarr", "\u{21A0}", false),
    ("Rarrtl", "\u{2916}", false),
    ("Rcaron", "\u{158}", false),
    ("Rcedil", "\u{156}", false),
    ("Rcy", "\u{420}", false),
    ("Re", "\u{211C}", false),
    ("ReverseElement", "\u{220B}", false),
    ("ReverseEquilibrium", "\u{21CB}", false),
    ("ReverseUpEquilibrium", "\u{296F}", false),
    ("Rfr", "\u{211C}", false),
    ("Rho", "\u{3A1}", false),
    ("RightAngleBracket", "\u{27E9}", false),
    ("RightArrow", "\u{2192}", false),
    ("RightArrowBar", "\u{21E5}", false),
    ("RightArrowLeftArrow", "\u{21C4}", false),
    ("RightCeiling", "\u{2309}", false),
    ("RightDoubleBracket", "\u{27E7}", false),
    ("RightDownTeeVector", "\u{295D}", false),
    ("RightDownVector", "\u{21C2}", false),
    ("RightDownVectorBar", "\u{2955}", false),
    ("RightFloor", "\u{230B}", false),
    ("RightTee", "\u{22A2}", false),
    ("RightTeeArrow", "\u{21A6}", false),
    ("RightTeeVector", "\u{295B}", false),
    ("RightTriangle", "\u{22B3}", false),
    ("RightTriangleBar", "\u{29D0}", false),
    ("RightTriangleEqual", "\u{22B5}", false),
    ("RightUpDownVector", "\u{294F}", false),
    ("RightUpTeeVector", "\u{295C}", false),
    ("RightUpVector", "\u{21BE}", false),
    ("RightUpVectorBar", "\u{2954}", false),
    ("RightVector", "\u{21C0}", false),
    ("RightVectorBar", "\u{2953}", false),
    ("Rightarrow", "\u{21D2}", false),
    ("Ropf", "\u{211D}", false),
    ("RoundImplies", "\u{2970}", false),
    ("Rrightarrow", "\u{21DB}", false),
    ("Rscr", "\u{211B}", false),
    ("Rsh", "\u{21B1}", false),
    ("RuleDelayed", "\u{29F4}", false),
    ("SHCHcy", "\u{429}", false),
    ("SHcy", "\u{428}", false),
    ("SOFTcy", "\u{42C}", false),
    ("Sacute", "\u{15A}", false),
    ("Sc", "\u{2ABC}", false),
    ("Scaron", "\u{160}", false),
    ("Scedil", "\u{15E}", false),
    ("Scirc", "\u{15C}", false),
    ("Scy", "\u{421}", false),
    ("Sfr", "\u{1D516}", false),
    ("ShortDownArrow", "\u{2193}", false),
    ("ShortLeftArrow", "\u{2190}", false),
    ("ShortRightArrow", "\u{2192}", false),
    ("ShortUpArrow", "\u{2191}", false),
    ("Sigma", "\u{3A3}", false),
    ("SmallCircle", "\u{2218}", false),
    ("Sopf", "\u{1D54A}", false),
    ("Sqrt", "\u{221A}", false),
    ("Square", "\u{25A1}", false),
    ("SquareIntersection", "\u{2293}", false),
    ("SquareSubset", "\u{228F}", false),
    ("SquareSubsetEqual", "\u{2291}", false),
    ("SquareSuperset", "\u{2290}", false),
    ("SquareSupersetEqual", "\u{2292}", false),
    ("SquareUnion", "\u{2294}", false),
    ("Sscr", "\u{1D4AE}", false),
    ("Star", "\u{22C6}", false),
    ("Sub", "\u{22D0}", false),
    ("Subset", "\u{22D0}", false),
    ("SubsetEqual", "\u{2286}", false),
    ("Succeeds", "\u{227B}", false),
    ("SucceedsEqual", "\u{2AB0}", false),
    ("SucceedsSlantEqual", "\u{227D}", false),
    ("SucceedsTilde", "\u{227F}", false),
    ("SuchThat", "\u{220B}", false),
    ("Sum", "\u{2211}", false),
    ("Sup", "\u{22D1}", false),
    ("Superset", "\u{2283}", false),
    ("SupersetEqual", "\u{2287}", false),
    ("Supset", "\u{22D1}", false),
    ("THORN", "\u{DE}", true),
    ("TRADE", "\u{2122}", false),
    ("TSHcy", "\u{40B}", false),
    ("TScy", "\u{426}", false),
    ("Tab", "\u{9}", false),
    ("Tau", "\u{3A4}", false),
    ("Tcaron", "\u{164}", false),
    ("Tcedil", "\u{162}", false),
    ("Tcy", "\u{422}", false),
    ("Tfr", "\u{1D517}", false),
    ("Therefore", "\u{2234}", false),
    ("Theta", "\u{398}", false),
    ("ThickSpace", "\u{205F}\u{200A}", false),
    ("ThinSpace", "\u{2009}", false),
    ("Tilde", "\u{223C}", false),
    ("TildeEqual", "\u{2243}", false),
    ("TildeFullEqual", "\u{2245}", false),
    ("TildeTilde", "\u{2248}", false),
    ("Topf", "\u{1D54B}", false),
    ("TripleDot", "\u{20DB}", false),
    ("Tscr", "\u{1D4AF}", false),
    ("Tstrok", "\u{166}", false),
    ("Uacute", "\u{DA}", true),
    ("Uarr", "\u{219F}", false),
    ("Uarrocir", "\u{2949}", false),
    ("Ubrcy", "\u{40E}", false),
    ("Ubreve", "\u{16C}", false),
    ("Ucirc", "\u{DB}", true),
    ("Ucy", "\u{423}", false),
    ("Udblac", "\u{170}", false),
    ("Ufr", "\u{1D518}", false),
    ("Ugrave", "\u{D9}", true),
    ("Umacr", "\u{16A}", false),
    ("UnderBar", "\u{5F}", false),
    ("UnderBrace", "\u{23DF}", false),
    ("UnderBracket", "\u{23B5}", false),
    ("UnderParenthesis", "\u{23DD}", false),
    ("Union", "\u{22C3}", false),
    ("UnionPlus", "\u{228E}", false),
    ("Uogon", "\u{172}", false),
    ("Uopf", "\u{1D54C}", false),
    ("UpArrow", "\u{2191}", false),
    ("UpArrowBar", "\u{2912}", false),
    ("UpArrowDownArrow", "\u{21C5}", false),
    ("UpDownArrow", "\u{2195}", false),
    ("UpEquilibrium", "\u{296E}", false),
    ("UpTee", "\u{22A5}", false),
    ("UpTeeArrow", "\u{21A5}", false),
    ("Uparrow", "\u{21D1}", false),
    ("Updownarrow", "\u{21D5}", false),
    ("UpperLeftArrow", "\u{2196}", false),
    ("UpperRightArrow", "\u{2197}", false),
    ("Upsi", "\u{3D2}", false),
    ("Upsilon", "\u{3A5}", false),
    ("Uring", "\u{16E}", false),
    ("Uscr", "\u{1D4B0}", false),
    ("Utilde", "\u{168}", false),
    ("Uuml", "\u{DC}", true),
    ("VDash", "\u{22AB}", false),
    ("Vbar", "\u{2AEB}", false),
    ("Vcy", "\u{412}", false),
    ("Vdash", "\u{22A9}", false),
    ("Vdashl", "\u{2AE6}", false),
    ("Vee", "\u{22C1}", false),
    ("Verbar", "\u{2016}", false),
    ("Vert", "\u{2016}", false),
    ("VerticalBar", "\u{2223}", false),
    ("VerticalLine", "\u{7C}", false),
    ("VerticalSeparator", "\u{2758}", false),
    ("VerticalTilde", "\u{2240}", false),
    ("VeryThinSpace", "\u{200A}", false),
    ("Vfr", "\u{1D519}", false),
    ("Vopf", "\u{1D54D}", false),
    ("Vscr", "\u{1D4B1}", false),
    ("Vvdash", "\u{22AA}", false),
    ("Wcirc", "\u{174}", false),
    ("Wedge", "\u{22C0}", false),
    ("Wfr", "\u{1D51A}", false),
    ("Wopf", "\u{1D54E}", false),
    ("Wscr", "\u{1D4B2}", false),
    ("Xfr", "\u{1D51B}", false),
    ("Xi", "\u{39E}", false),
    ("Xopf", "\u{1D54F}", false),
    ("Xscr", "\u{1D4B3}", false),
    ("YAcy", "\u{42F}", false),
    ("YIcy", "\u{407}", false),
    ("YUcy", "\u{42E}", false),
    ("Yacute", "\u{DD}", true),
    ("Ycirc", "\u{176}", false),
    ("Ycy", "\u{42B}", false),
    ("Yfr", "\u{1D51C}", false),
    ("Yopf", "\u{1D550}", false),
    ("Yscr", "\u{1D4B4}", false),
    ("Yuml", "\u{178}", false),
    ("ZHcy", "\u{416}", false),
    ("Zacute", "\u{179}", false),
    ("Zcaron", "\u{17D}", false),
    ("Zcy", "\u{417}", false),
    ("Zdot", "\u{17B}", false),
    ("ZeroWidthSpace", "\u{200B}", false),
    ("Zeta", "\u{396}", false),
    ("Zfr", "\u{2128}", false),
    ("Zopf", "\u{2124}", false),
    ("Zscr", "\u{1D4B5}", false),
    ("aacute", "\u{E1}", true),
    ("abreve", "\u{103}", false),
    ("ac", "\u{223E}", false),
    ("acE", "\u{223E}\u{333}", false),
    ("acd", "\u{223F}", false),
    ("acirc", "\u{E2}", true),
    ("acute", "\u{B4}", true),
    ("acy", "\u{430}", false),
    ("aelig", "\u{E6}", true),
    ("af", "\u{2061}", false),
    ("afr", "\u{1D51E}", false),
    ("agrave", "\u{E0}", true),
    ("alefsym", "\u{2135}", false),
    ("aleph", "\u{2135}", false),
    ("alpha", "\u{3B1}", false),
    ("amacr", "\u{101}", false),
    ("amalg", "\u{2A3F}", false),
    ("amp", "\u{26}", true),
    ("and", "\u{2227}", false),
    ("andand", "\u{2A55}", false),
    ("andd", "\u{2A5C}", false),
    ("andslope", "\u{2A58}", false),
    ("andv", "\u{2A5A}", false),
    ("ang", "\u{2220}", false),
    ("ange", "\u{29A4}", false),
    ("angle", "\u{2220}", false),
    ("angmsd", "\u{2221}", false),
    ("angmsdaa", "\u{29A8}", false),
    ("angmsdab", "\u{29A9}", false),
    ("angmsdac", "\u{29AA}", false),
    ("angmsdad", "\u{29AB}", false),
    ("angmsdae", "\u{29AC}", false),
    ("angmsdaf", "\u{29AD}", false),
    ("angmsdag", "\u{29AE}", false),
    ("angmsdah", "\u{29AF}", false),
    ("angrt", "\u{221F}", false),
    ("angrtvb", "\u{22BE}", false),
    ("angrtvbd", "\u{299D}", false),
    ("angsph", "\u{2222}", false),
    ("angst", "\u{C5}", false),
    ("angzarr", "\u{237C}", false),
    ("aogon", "\u{105}", false),
    ("aopf", "\u{1D552}", false),
    ("ap", "\u{2248}", false),
    ("apE", "\u{2A70}", false),
    ("apacir", "\u{2A6F}", false),
    ("ape", "\u{224A}", false),
    ("apid", "\u{224B}", false),
    ("apos", "\u{27}", false),
    ("approx", "\u{2248}", false),
    ("approxeq", "\u{224A}", false),
    ("aring", "\u{E5}", true),
    ("ascr", "\u{1D4B6}", false),
    ("ast", "\u{2A}", false),
    ("asymp", "\u{2248}", false),
    ("asympeq", "\u{224D}", false),
    ("atilde", "\u{E3}", true),
    ("auml", "\u{E4}", true),
    ("awconint", "\u{2233}", false),
    ("awint", "\u{2A11}", false),
    ("bNot", "\u{2AED}", false),
    ("backcong", "\u{224C}", false),
    ("backepsilon", "\u{3F6}", false),
    ("backprime", "\u{2035}", false),
    ("backsim", "\u{223D}", false),
    ("backsimeq", "\u{22CD}", false),
    ("barvee", "\u{22BD}", false),
    ("barwed", "\u{2305}", false),
    ("barwedge", "\u{2305}", false),
    ("bbrk", "\u{23B5}", false),
    ("bbrktbrk", "\u{23B6}", false),
    ("bcong", "\u{224C}", false),
    ("bcy", "\u{431}", false),
    ("bdquo", "\u{201E}", false),
    ("becaus", "\u{2235}", false),
    ("because", "\u{2235}", false),
    ("bemptyv", "\u{29B0}", false),
    ("bepsi", "\u{3F6}", false),
    ("bernou", "\u{212C}", false),
    ("beta", "\u{3B2}", false),
    ("beth", "\u{2136}", false),
    ("between", "\u{226C}", false),
    ("bfr", "\u{1D51F}", false),
    ("bigcap", "\u{22C2}", false),
    ("bigcirc", "\u{25EF}", false),
    ("bigcup", "\u{22C3}", false),
    ("bigodot", "\u{2A00}", false),
    ("bigoplus", "\u{2A01}", false),
    ("bigotimes", "\u{2A02}", false),
    ("bigsqcup", "\u{2A06}", false),
    ("bigstar", "\u{2605}", false),
    ("bigtriangledown", "\u{25BD}", false),
    ("bigtriangleup", "\u{25B3}", false),
    ("biguplus", "\u{2A04}", false),
    ("bigvee", "\u{22C1}", false),
    ("bigwedge", "\u{22C0}", false),
    ("bkarow", "\u{290D}", false),
    ("blacklozenge", "\u{29EB}", false),
    ("blacksquare", "\u{25AA}", false),
    ("blacktriangle", "\u{25B4}", false),
    ("blacktriangledown", "\u{25BE}", false),
    ("blacktriangleleft", "\u{25C2}", false),
    ("blacktriangleright", "\u{25B8}", false),
    ("blank", "\u{2423}", false),
    ("blk12", "\u{2592}", false),
    ("blk14", "\u{2591}", false),
    ("blk34", "\u{2593}", false),
    ("block", "\u{2588}", false),
    ("bne", "\u{3D}\u{20E5}", false),
    ("bnequiv", "\u{2261}\u{20E5}", false),
    ("bnot", "\u{2310}", false),
    ("bopf", "\u{1D553}", false),
    ("bot", "\u{22A5}", false),
    ("bottom", "\u{22A5}", false),
    ("bowtie", "\u{22C8}", false),
    ("boxDL", "\u{2557}", false),
    ("boxDR", "\u{2554}", false),
    ("boxDl", "\u{2556}", false),
    ("boxDr", "\u{2553}", false),
    ("boxH", "\u{2550}", false),
    ("boxHD", "\u{2566}", false),
    ("boxHU", "\u{2569}", false),
    ("boxHd", "\u{2564}", false),
    ("boxHu", "\u{2567}", false),
    ("boxUL", "\u{255D}", false),
    ("boxUR", "\u{255A}", false),
    ("boxUl", "\u{255C}", false),
    ("boxUr", "\u{2559}", false),
    ("boxV", "\u{2551}", false),
    ("boxVH", "\u{256C}", false),
    ("boxVL", "\u{2563}", false),
    ("boxVR", "\u{2560}", false),
    ("boxVh", "\u{256B}", false),
    ("boxVl", "\u{2562}", false),
    ("boxVr", "\u{255F}", false),
    ("boxbox", "\u{29C9}", false),
    ("boxdL", "\u{2555}", false),
    ("boxdR", "\u{2552}", false),
    ("boxdl", "\u{2510}", false),
    ("boxdr", "\u{250C}", false),
    ("boxh", "\u{2500}", false),
    ("boxhD", "\u{2565}", false),
    ("boxhU", "\u{2568}", false),
    ("boxhd", "\u{252C}", false),
    ("boxhu", "\u{2534}", false),
    ("boxminus", "\u{229F}", false),
    ("boxplus", "\u{229E}", false),
    ("boxtimes", "\u{22A0}", false),
    ("boxuL", "\u{255B}", false),
    ("boxuR", "\u{2558}", false),
    ("boxul", "\u{2518}", false),
    ("boxur", "\u{2514}", false),
    ("boxv", "\u{2502}", false),
    ("boxvH", "\u{256A}", false),
    ("boxvL", "\u{2561}", false),
    ("boxvR", "\u{255E}", false),
    ("boxvh", "\u{253C}", false),
    ("boxvl", "\u{2524}", false),
    ("boxvr", "\u{251C}", false),
    ("bprime", "\u{2035}", false),
    ("breve", "\u{2D8}", false),
    ("brvbar", "\u{A6}", true),
    ("bscr", "\u{1D4B7}", false),
    ("bsemi", "\u{204F}", false),
    ("bsim", "\u{223D}", false),
    ("bsime", "\u{22CD}", false),
    ("bsol", "\u{5C}", false),
    ("bsolb", "\u{29C5}", false),
    ("bsolhsub", "\u{27C8}", false),
    ("bull", "\u{2022}", false),
    ("bullet", "\u{2022}", false),
    ("bump", "\u{224E}", false),
    ("bumpE", "\u{2AAE}", false),
    ("bumpe", "\u{224F}", false),
    ("bumpeq", "\u{224F}", false),
    ("cacute", "\u{107}", false),
    ("cap", "\u{2229}", false),
    ("capand", "\u{2A44}", false),
    ("capbrcup", "\u{2A49}", false),
    ("capcap", "\u{2A4B}", false),
    ("capcup", "\u{2A47}", false),
    ("capdot", "\u{2A40}", false),
    ("caps", "\u{2229}\u{FE00}", false),
    ("caret", "\u{2041}", false),
    ("caron", "\u{2C7}", false),
    ("ccaps", "\u{2A4D}", false),
    ("ccaron", "\u{10D}", false),
    ("ccedil", "\u{E7}", true),
    ("ccirc", "\u{109}", false),
    ("ccups", "\u{2A4C}", false),
    ("ccupssm", "\u{2A50}", false),
    ("cdot", "\u{10B}", false),
    ("cedil", "\u{B8}", true),
    ("cemptyv", "\u{29B2}", false),
    ("cent", "\u{A2}", true),
    ("centerdot", "\u{B7}", false),
    ("cfr", "\u{1D520}", false),
    ("chcy", "\u{447}", false),
    ("check", "\u{2713}", false),
    ("checkmark", "\u{2713}", false),
    ("chi", "\u{3C7}", false),
    ("cir", "\u{25CB}", false),
    ("cirE", "\u{29C3}", false),
    ("circ", "\u{2C6}", false),
    ("circeq", "\u{2257}", false),
    ("circlearrowleft", "\u{21BA}", false),
    ("circlearrowright", "\u{21BB}", false),
    ("circledR", "\u{AE}", false),
    ("circledS", "\u{24C8}", false),
    ("circledast", "\u{229B}", false),
    ("circledcirc", "\u{229A}", false),
    ("circleddash", "\u{229D}", false),
    ("cire", "\u{2257}", false),
    ("cirfnint", "\u{2A10}", false),
    ("cirmid", "\u{2AEF}", false),
    ("cirscir", "\u{29C2}", false),
    ("clubs", "\u{2663}", false),
    ("clubsuit", "\u{2663}", false),
    ("colon", "\u{3A}", false),
    ("colone", "\u{2254}", false),
    ("coloneq", "\u{2254}", false),
    ("comma", "\u{2C}", false),
    ("commat", "\u{40}", false),
    ("comp", "\u{2201}", false),
    ("compfn", "\u{2218}", false),
    ("complement", "\u{2201}", false),
    ("complexes", "\u{2102}", false),
    ("cong", "\u{2245}", false),
    ("congdot", "\u{2A6D}", false),
    ("conint", "\u{222E}", false),
    ("copf", "\u{1D554}", false),
    ("coprod", "\u{2210}", false),
    ("copy", "\u{A9}", true),
    ("copysr", "\u{2117}", false),
    ("crarr", "\u{21B5}", false),
    ("cross", "\u{2717}", false),
    ("cscr", "\u{1D4B8}", false),
    ("csub", "\u{2ACF}", false),
    ("csube", "\u{2AD1}", false),
    ("csup", "\u{2AD0}", false),
    ("csupe", "\u{2AD2}", false),
    ("ctdot", "\u{22EF}", false),
    ("cudarrl", "\u{2938}", false),
    ("cudarrr", "\u{2935}", false),
    ("cuepr", "\u{22DE}", false),
    ("cuesc", "\u{22DF}", false),
    ("cularr", "\u{21B6}", false),
    ("cularrp", "\u{293D}", false),
    ("cup", "\u{222A}", false),
    ("cupbrcap", "\u{2A48}", false),
    ("cupcap", "\u{2A46}", false),
    ("cupcup", "\u{2A4A}", false),
    ("cupdot", "\u{228D}", false),
    ("cupor", "\u{2A45}", false),
    ("cups", "\u{222A}\u{FE00}", false),
    ("curarr", "\u{21B7}", false),
    ("curarrm", "\u{293C}", false),
    ("curlyeqprec", "\u{22DE}", false),
    ("curlyeqsucc", "\u{22DF}", false),
    ("curlyvee", "\u{22CE}", false),
    ("curlywedge", "\u{22CF}", false),
    ("curren", "\u{A4}", true),
    ("curvearrowleft", "\u{21B6}", false),
    ("curvearrowright", "\u{21B7}", false),
    ("cuvee", "\u{22CE}", false),
    ("cuwed", "\u{22CF}", false),
    ("cwconint", "\u{2232}", false),
    ("cwint", "\u{2231}", false),
    ("cylcty", "\u{232D}", false),
    ("dArr", "\u{21D3}", false),
    ("dHar", "\u{2965}", false),
    ("dagger", "\u{2020}", false),
    ("daleth", "\u{2138}", false),
    ("darr", "\u{2193}", false),
    ("dash", "\u{2010}", false),
    ("dashv", "\u{22A3}", false),
    ("dbkarow", "\u{290F}", false),
    ("dblac", "\u{2DD}", false),
    ("dcaron", "\u{10F}", false),
    ("dcy", "\u{434}", false),
    ("dd", "\u{2146}", false),
    ("ddagger", "\u{2021}", false),
    ("ddarr", "\u{21CA}", false),
    ("ddotseq", "\u{2A77}", false),
    ("deg", "\u{B0}", true),
    ("delta", "\u{3B4}", false),
    ("demptyv", "\u{29B1}", false),
    ("dfisht", "\u{297F}", false),
    ("dfr", "\u{1D521}", false),
    ("dharl", "\u{21C3}", false),
    ("dharr", "\u{21C2}", false),
    ("diam", "\u{22C4}", false),
    ("diamond", "\u{22C4}", false),
    ("diamondsuit", "\u{2666}", false),
    ("diams", "\u{2666}", false),
    ("die", "\u{A8}", false),
    ("digamma", "\u{3DD}", false),
    ("disin", "\u{22F2}", false),
    ("div", "\u{F7}", false),
    ("divide", "\u{F7}", true),
    ("divideontimes", "\u{22C7}", false),
    ("divonx", "\u{22C7}", false),
    ("djcy", "\u{452}", false),
    ("dlcorn", "\u{231E}", false),
    ("dlcrop", "\u{230D}", false),
    ("dollar", "\u{24}", false),
    ("dopf", "\u{1D555}", false),
    ("dot", "\u{2D9}", false),
    ("doteq", "\u{2250}", false),
    ("doteqdot", "\u{2251}", false),
    ("dotminus", "\u{2238}", false),
    ("dotplus", "\u{2214}", false),
    ("dotsquare", "\u{22A1}", false),
    ("doublebarwedge", "\u{2306}", false),
    ("downarrow", "\u{2193}", false),
    ("downdownarrows", "\u{21CA}", false),
    ("downharpoonleft", "\u{21C3}", false),
    ("downharpoonright", "\u{21C2}", false),
    ("drbkarow", "\u{2910}", false),
    ("drcorn", "\u{231F}", false),
    ("drcrop", "\u{230C}", false),
    ("dscr", "\u{1D4B9}", false),
    ("dscy", "\u{455}", false),
    ("dsol", "\u{29F6}", false),
    ("dstrok", "\u{111}", false),
    ("dtdot", "\u{22F1}", false),
    ("dtri", "\u{25BF}", false),
    ("dtrif", "\u{25BE}", false),
    ("duarr", "\u{21F5}", false),
    ("duhar", "\u{296F}", false),
    ("dwangle", "\u{29A6}", false),
    ("dzcy", "\u{45F}", false),
    ("dzigrarr", "\u{27FF}", false),
    ("eDDot", "\u{2A77}", false),
    ("eDot", "\u{2251}", false),
    ("eacute", "\u{E9}", true),
    ("easter", "\u{2A6E}", false),
    ("ecaron", "\u{11B}", false),
    ("ecir", "\u{2256}", false),
    ("ecirc", "\u{EA}", true),
    ("ecolon", "\u{2255}", false),
    ("ecy", "\u{44D}", false),
    ("edot", "\u{117}", false),
    ("ee", "\u{2147}", false),
    ("efDot", "\u{2252}", false),
    ("efr", "\u{1D522}", false),
    ("eg", "\u{2A9A}", false),
    ("egrave", "\u{E8}", true),
    ("egs", "\u{2A96}", false),
    ("egsdot", "\u{2A98}", false),
    ("el", "\u{2A99}", false),
    ("elinters", "\u{23E7}", false),
    ("ell", "\u{2113}", false),
    ("els", "\u{2A95}", false),
    ("elsdot", "\u{2A97}", false),
    ("emacr", "\u{113}", false),
    ("empty", "\u{2205}", false),
    ("emptyset", "\u{2205}", false),
    ("emptyv", "\u{2205}", false),
    ("emsp", "\u{2003}", false),
    ("emsp13", "\u{2004}", false),
    ("emsp14", "\u{2005}", false),
    ("eng", "\u{14B}", false),
    ("ensp", "\u{2002}", false),
    ("eogon", "\u{119}", false),
    ("eopf", "\u{1D556}", false),
    ("epar", "\u{22D5}", false),
    ("eparsl", "\u{29E3}", false),
    ("eplus", "\u{2A71}", false),
    ("epsi", "\u{3B5}", false),
    ("epsilon", "\u{3B5}", false),
    ("epsiv", "\u{3F5}", false),
    ("eqcirc", "\u{2256}", false),
    ("eqcolon", "\u{2255}", false),
    ("eqsim", "\u{2242}", false),
    ("eqslantgtr", "\u{2A96}", false),
    ("eqslantless", "\u{2A95}", false),
    ("equals", "\u{3D}", false),
    ("equest", "\u{225F}", false),
    ("equiv", "\u{2261}", false),
    ("equivDD", "\u{2A78}", false),
    ("eqvparsl", "\u{29E5}", false),
    ("erDot", "\u{2253}", false),
    ("erarr", "\u{2971}", false),
    ("escr", "\u{212F}", false),
    ("esdot", "\u{2250}", false),
    ("esim", "\u{2242}", false),
    ("eta", "\u{3B7}", false),
    ("eth", "\u{F0}", true),
    ("euml", "\u{EB}", true),
    ("euro", "\u{20AC}", false),
    ("excl", "\u{21}", false),
    ("exist", "\u{2203}", false),
    ("expectation", "\u{2130}", false),
    ("exponentiale", "\u{2147}", false),
    ("fallingdotseq", "\u{2252}", false),
    ("fcy", "\u{444}", false),
    ("female", "\u{2640}", false),
    ("ffilig", "\u{FB03}", false),
    ("fflig", "\u{FB00}", false),
    ("ffllig", "\u{FB04}", false),
    ("ffr", "\u{1D523}", false),
    ("filig", "\u{FB01}", false),
    ("fjlig", "\u{66}\u{6A}", false),
    ("flat", "\u{266D}", false),
    ("fllig", "\u{FB02}", false),
    ("fltns", "\u{25B1}", false),
    ("fnof", "\u{192}", false),
    ("fopf", "\u{1D557}", false),
    ("forall", "\u{2200}", false),
    ("fork", "\u{22D4}", false),
    ("forkv", "\u{2AD9}", false),
    ("fpartint", "\u{2A0D}", false),
    ("frac12", "\u{BD}", true),
    ("frac13", "\u{2153}", false),
    ("frac14", "\u{BC}", true),
    ("frac15", "\u{2155}", false),
    ("frac16", "\u{2159}", false),
    ("frac18", "\u{215B}", false),
    ("frac23", "\u{2154}", false),
    ("frac25", "\u{2156}", false),
    ("frac34", "\u{BE}", true),
    ("frac35", "\u{2157}", false),
    ("frac38", "\u{215C}", false),
    ("frac45", "\u{2158}", false),
    ("frac56", "\u{215A}", false),
    ("frac58", "\u{215D}", false),
    ("frac78", "\u{215E}", false),
    ("frasl", "\u{2044}", false),
    ("frown", "\u{2322}", false),
    ("fscr", "\u{1D4BB}", false),
    ("gE", "\u{2267}", false),
    ("gEl", "\u{2A8C}", false),
    ("gacute", "\u{1F5}", false),
    ("gamma", "\u{3B3}", false),
    ("gammad", "\u{3DD}", false),
    ("gap", "\u{2A86}", false),
    ("gbreve", "\u{11F}", false),
    ("gcirc", "\u{11D}", false),
    ("gcy", "\u{433}", false),
    ("gdot", "\u{121}", false),
    ("ge", "\u{2265}", false),
    ("gel", "\u{22DB}", false),
    ("geq", "\u{2265}", false),
    ("geqq", "\u{2267}", false),
    ("geqslant", "\u{2A7E}", false),
    ("ges", "\u{2A7E}", false),
    ("gescc", "\u{2AA9}", false),
    ("gesdot", "\u{2A80}", false),
    ("gesdoto", "\u{2A82}", false),
    ("gesdotol", "\u{2A84}", false),
    ("gesl", "\u{22DB}\u{FE00}", false),
    ("gesles", "\u{2A94}", false),
    ("gfr", "\u{1D524}", false),
    ("gg", "\u{226B}", false),
    ("ggg", "\u{22D9}", false),
    ("gimel", "\u{2137}", false),
    ("gjcy", "\u{453}", false),
    ("gl", "\u{2277}", false),
    ("glE", "\u{2A92}", false),
    ("gla", "\u{2AA5}", false),
    ("glj", "\u{2AA4}", false),
    ("gnE", "\u{2269}", false),
    ("gnap", "\u{2A8A}", false),
    ("gnapprox", "\u{2A8A}", false),
    ("gne", "\u{2A88}", false),
    ("gneq", "\u{2A88}", false),
    ("gneqq", "\u{2269}", false),
    ("gnsim", "\u{22E7}", false),
    ("gopf", "\u{1D558}", false),
    ("grave", "\u{60}", false),
    ("gscr", "\u{210A}", false),
    ("gsim", "\u{2273}", false),
    ("gsime", "\u{2A8E}", false),
    ("gsiml", "\u{2A90}", false),
    ("gt", "\u{3E}", true),
    ("gtcc", "\u{2AA7}", false),
    ("gtcir", "\u{2A7A}", false),
    ("gtdot", "\u{22D7}", false),
    ("gtlPar", "\u{2995}", false),
    ("gtquest", "\u{2A7C}", false),
    ("gtrapprox", "\u{2A86}", false),
    ("gtrarr", "\u{2978}", false),
    ("gtrdot", "\u{22D7}", false),
    ("gtreqless", "\u{22DB}", false),
    ("gtreqqless", "\u{2A8C}", false),
    ("gtrless", "\u{2277}", false),
    ("gtrsim", "\u{2273}", false),
    ("gvertneqq", "\u{2269}\u{FE00}", false),
    ("gvnE", "\u{2269}\u{FE00}", false),
    ("hArr", "\u{21D4}", false),
    ("hairsp", "\u{200A}", false),
    ("half", "\u{BD}", false),
    ("hamilt", "\u{210B}", false),
    ("hardcy", "\u{44A}", false),
    ("harr", "\u{2194}", false),
    ("harrcir", "\u{2948}", false),
    ("harrw", "\u{21AD}", false),
    ("hbar", "\u{210F}", false),
    ("hcirc", "\u{125}", false),
    ("hearts", "\u{2665}", false),
    ("heartsuit", "\u{2665}", false),
    ("hellip", "\u{2026}", false),
    ("hercon", "\u{22B9}", false),
    ("hfr", "\u{1D525}", false),
    ("hksearow", "\u{2925}", false),
    ("hkswarow", "\u{2926}", false),
    ("hoarr", "\u{21FF}", false),
    ("homtht", "\u{223B}", false),
    ("hookleftarrow", "\u{21A9}", false),
    ("hookrightarrow", "\u{21AA}", false),
    ("hopf", "\u{1D559}", false),
    ("horbar", "\u{2015}", false),
    ("hscr", "\u{1D4BD}", false),
    ("hslash", "\u{210F}", false),
    ("hstrok", "\u{127}", false),
    ("hybull", "\u{2043}", false),
    ("hyphen", "\u{2010}", false),
    ("iacute", "\u{ED}", true),
    ("ic", "\u{2063}", false),
    ("icirc", "\u{EE}", true),
    ("icy", "\u{438}", false),
    ("iecy", "\u{435}", false),
    ("iexcl", "\u{A1}", true),
    ("iff", "\u{21D4}", false),
    ("ifr", "\u{1D526}", false),
    ("igrave", "\u{EC}", true),
    ("ii", "\u{2148}", false),
    ("iiiint", "\u{2A0C}", false),
    ("iiint", "\u{222D}", false),
    ("iinfin", "\u{29DC}", false),
    ("iiota", "\u{2129}", false),
    ("ijlig", "\u{133}", false),
    ("imacr", "\u{12B}", false),
    ("image", "\u{2111}", false),
    ("imagline", "\u{2110}", false),
    ("imagpart", "\u{2111}", false),
    ("imath", "\u{131}", false),
    ("imof", "\u{22B7}", false),
    ("imped", "\u{1B5}", false),
    ("in", "\u{2208}", false),
    ("incare", "\u{2105}", false),
    ("infin", "\u{221E}", false),
    ("infintie", "\u{29DD}", false),
    ("inodot", "\u{131}", false),
    ("int", "\u{222B}", false),
    ("intcal", "\u{22BA}", false),
    ("integers", "\u{2124}", false),
    ("intercal", "\u{22BA}", false),
    ("intlarhk", "\u{2A17}", false),
    ("intprod", "\u{2A3C}", false),
    ("iocy", "\u{451}", false),
    ("iogon", "\u{12F}", false),
    ("iopf", "\u{1D55A}", false),
    ("iota", "\u{3B9}", false),
    ("iprod", "\u{2A3C}", false),
    ("iquest", "\u{BF}", true),
    ("iscr", "\u{1D4BE}", false),
    ("isin", "\u{2208}", false),
    ("isinE", "\u{22F9}", false),
    ("isindot", "\u{22F5}", false),
    ("isins", "\u{22F4}", false),
    ("isinsv", "\u{22F3}", false),
    ("isinv", "\u{2208}", false),
    ("it", "\u{2062}", false),
    ("itilde", "\u{129}", false),
    ("iukcy", "\u{456}", false),
    ("iuml", "\u{EF}", true),
    ("jcirc", "\u{135}", false),
    ("jcy", "\u{439}", false),
    ("jfr", "\u{1D527}", false),
    ("jmath", "\u{237}", false),
    ("jopf", "\u{1D55B}", false),
    ("jscr", "\u{1D4BF}", false),
    ("jsercy", "\u{458}", false),
    ("jukcy", "\u{454}", false),
    ("kappa", "\u{3BA}", false),
    ("kappav", "\u{3F0}", false),
    ("kcedil", "\u{137}", false),
    ("kcy", "\u{43A}", false),
    ("kfr", "\u{1D528}", false),
    ("kgreen", "\u{138}", false),
    ("khcy", "\u{445}", false),
    ("kjcy", "\u{45C}", false),
    ("kopf", "\u{1D55C}", false),
    ("kscr", "\u{1D4C0}", false),
    ("lAarr", "\u{21DA}", false),
    ("lArr", "\u{21D0}", false),
    ("lAtail", "\u{291B}", false),
    ("lBarr", "\u{290E}", false),
    ("lE", "\u{2266}", false),
    ("lEg", "\u{2A8B}", false),
    ("lHar", "\u{2962}", false),
    ("lacute", "\u{13A}", false),
    ("laemptyv", "\u{29B4}", false),
    ("lagran", "\u{2112}", false),
    ("lambda", "\u{3BB}", false),
    ("lang", "\u{27E8}", false),
    ("langd", "\u{2991}", false),
    ("langle", "\u{27E8}", false),
    ("lap", "\u{2A85}", false),
    ("laquo", "\u{AB}", true),
    ("larr", "\u{2190}", false),
    ("larrb", "\u{21E4}", false),
    ("larrbfs", "\u{291F}", false),
    ("larrfs", "\u{291D}", false),
    ("larrhk", "\u{21A9}", false),
    ("larrlp", "\u{21AB}", false),
    ("larrpl", "\u{2939}", false),
    ("larrsim", "\u{2973}", false),
    ("larrtl", "\u{21A2}", false),
    ("lat", "\u{2AAB}", false),
    ("latail", "\u{2919}", false),
    ("late", "\u{2AAD}", false),
    ("lates", "\u{2AAD}\u{FE00}", false),
    ("lbarr", "\u{290C}", false),
    ("lbbrk", "\u{2772}", false),
    ("lbrace", "\u{7B}", false),
    ("lbrack", "\u{5B}", false),
    ("lbrke", "\u{298B}", false),
    ("lbrksld", "\u{298F}", false),
    ("lbrkslu", "\u{298D}", false),
    ("lcaron", "\u{13E}", false),
    ("lcedil", "\u{13C}", false),
    ("lceil", "\u{2308}", false),
    ("lcub", "\u{7B}", false),
    ("lcy", "\u{43B}", false),
    ("ldca", "\u{2936}", false),
    ("ldquo", "\u{201C}", false),
    ("ldquor", "\u{201E}", false),
    ("ldrdhar", "\u{2967}", false),
    ("ldrushar", "\u{294B}", false),
    ("ldsh", "\u{21B2}", false),
    ("le", "\u{2264}", false),
    ("leftarrow", "\u{2190}", false),
    ("leftarrowtail", "\u{21A2}", false),
    ("leftharpoondown", "\u{21BD}", false),
    ("leftharpoonup", "\u{21BC}", false),
    ("leftleftarrows", "\u{21C7}", false),
    ("leftrightarrow", "\u{2194}", false),
    ("leftrightarrows", "\u{21C6}", false),
    ("leftrightharpoons", "\u{21CB}", false),
    ("leftrightsquigarrow", "\u{21AD}", false),
    ("leftthreetimes", "\u{22CB}", false),
    ("leg", "\u{22DA}", false),
    ("leq", "\u{2264}", false),
    ("leqq", "\u{2266}", false),
    ("leqslant", "\u{2A7D}", false),
    ("les", "\u{2A7D}", false),
    ("lescc", "\u{2AA8}", false),
    ("lesdot", "\u{2A7F}", false),
    ("lesdoto", "\u{2A81}", false),
    ("lesdotor", "\u{2A83}", false),
    ("lesg", "\u{22DA}\u{FE00}", false),
    ("lesges", "\u{2A93}", false),
    ("lessapprox", "\u{2A85}", false),
    ("lessdot", "\u{22D6}", false),
    ("lesseqgtr", "\u{22DA}", false),
    ("lesseqqgtr", "\u{2A8B}", false),
    ("lessgtr", "\u{2276}", false),
    ("lesssim", "\u{2272}", false),
    ("lfisht", "\u{297C}", false),
    ("lfloor", "\u{230A}", false),
    ("lfr", "\u{1D529}", false),
    ("lg", "\u{2276}", false),
    ("lgE", "\u{2A91}", false),
    ("lhard", "\u{21BD}", false),
    ("lharu", "\u{21BC}", false),
    ("lharul", "\u{296A}", false),
    ("lhblk", "\u{2584}", false),
    ("ljcy", "\u{459}", false),
    ("ll", "\u{226A}", false),
    ("llarr", "\u{21C7}", false),
    ("llcorner", "\u{231E}", false),
    ("llhard", "\u{296B}", false),
    ("lltri", "\u{25FA}", false),
    ("lmidot", "\u{140}", false),
    ("lmoust", "\u{23B0}", false),
    ("lmoustache", "\u{23B0}", false),
    ("lnE", "\u{2268}", false),
    ("lnap", "\u{2A89}", false),
    ("lnapprox", "\u{2A89}", false),
    ("lne", "\u{2A87}", false),
    ("lneq", "\u{2A87}", false),
    ("lneqq", "\u{2268}", false),
    ("lnsim", "\u{22E6}", false),
    ("loang", "\u{27EC}", false),
    ("loarr", "\u{21FD}", false),
    ("lobrk", "\u{27E6}", false),
    ("longleftarrow", "\u{27F5}", false),
    ("longleftrightarrow", "\u{27F7}", false),
    ("longmapsto", "\u{27FC}", false),
    ("longrightarrow", "\u{27F6}", false),
    ("looparrowleft", "\u{21AB}", false),
    ("looparrowright", "\u{21AC}", false),
    ("lopar", "\u{2985}", false),
    ("lopf", "\u{1D55D}", false),
    ("loplus", "\u{2A2D}", false),
    ("lotimes", "\u{2A34}", false),
    ("lowast", "\u{2217}", false),
    ("lowbar", "\u{5F}", false),
    ("loz", "\u{25CA}", false),
    ("lozenge", "\u{25CA}", false),
    ("lozf", "\u{29EB}", false),
    ("lpar", "\u{28}", false),
    ("lparlt", "\u{2993}", false),
    ("lrarr", "\u{21C6}", false),
    ("lrcorner", "\u{231F}", false),
    ("lrhar", "\u{21CB}", false),
    ("lrhard", "\u{296D}", false),
    ("lrm", "\u{200E}", false),
    ("lrtri", "\u{22BF}", false),
    ("lsaquo", "\u{2039}", false),
    ("lscr", "\u{1D4C1}", false),
    ("lsh", "\u{21B0}", false),
    ("lsim", "\u{2272}", false),
    ("lsime", "\u{2A8D}", false),
    ("lsimg", "\u{2A8F}", false),
    ("lsqb", "\u{5B}", false),
    ("lsquo", "\u{2018}", false),
    ("lsquor", "\u{201A}", false),
    ("lstrok", "\u{142}", false),
    ("lt", "\u{3C}", true),
    ("ltcc", "\u{2AA6}", false),
    ("ltcir", "\u{2A79}", false),
    ("ltdot", "\u{22D6}", false),
    ("lthree", "\u{22CB}", false),
    ("ltimes", "\u{22C9}", false),
    ("ltlarr", "\u{2976}", false),
    ("ltquest", "\u{2A7B}", false),
    ("ltrPar", "\u{2996}", false),
    ("ltri", "\u{25C3}", false),
    ("ltrie", "\u{22B4}", false),
    ("ltrif", "\u{25C2}", false),
    ("lurdshar", "\u{294A}", false),
    ("luruhar", "\u{2966}", false),
    ("lvertneqq", "\u{2268}\u{FE00}", false),
    ("lvnE", "\u{2268}\u{FE00}", false),
    ("mDDot", "\u{223A}", false),
    ("macr", "\u{AF}", true),
    ("male", "\u{2642}", false),
    ("malt", "\u{2720}", false),
    ("maltese", "\u{2720}", false),
    ("map", "\u{21A6}", false),
    ("mapsto", "\u{21A6}", false),
    ("mapstodown", "\u{21A7}", false),
    ("mapstoleft", "\u{21A4}", false),
    ("mapstoup", "\u{21A5}", false),
    ("marker", "\u{25AE}", false),
    ("mcomma", "\u{2A29}", false),
    ("mcy", "\u{43C}", false),
    ("mdash", "\u{2014}", false),
    ("measuredangle", "\u{2221}", false),
    ("mfr", "\u{1D52A}", false),
    ("mho", "\u{2127}", false),
    ("micro", "\u{B5}", true),
    ("mid", "\u{2223}", false),
    ("midast", "\u{2A}", false),
    ("midcir", "\u{2AF0}", false),
    ("middot", "\u{B7}", true),
    ("minus", "\u{2212}", false),
    ("minusb", "\u{229F}", false),
    ("minusd", "\u{2238}", false),
    ("minusdu", "\u{2A2A}", false),
    ("mlcp", "\u{2ADB}", false),
    ("mldr", "\u{2026}", false),
    ("mnplus", "\u{2213}", false),
    ("models", "\u{22A7}", false),
    ("mopf", "\u{1D55E}", false),
    ("mp", "\u{2213}", false),
    ("mscr", "\u{1D4C2}", false),
    ("mstpos", "\u{223E}", false),
    ("mu", "\u{3BC}", false),
    ("multimap", "\u{22B8}", false),
    ("mumap", "\u{22B8}", false),
    ("nGg", "\u{22D9}\u{338}", false),
    ("nGt", "\u{226B}\u{20D2}", false),
    ("nGtv", "\u{226B}\u{338}", false),
    ("nLeftarrow", "\u{21CD}", false),
    ("nLeftrightarrow", "\u{21CE}", false),
    ("nLl", "\u{22D8}\u{338}", false),
    ("nLt", "\u{226A}\u{20D2}", false),
    ("nLtv", "\u{226A}\u{338}", false),
    ("nRightarrow", "\u{21CF}", false),
    ("nVDash", "\u{22AF}", false),
    ("nVdash", "\u{22AE}", false),
    ("nabla", "\u{2207}", false),
    ("nacute", "\u{144}", false),
    ("nang", "\u{2220}\u{20D2}", false),
    ("nap", "\u{2249}", false),
    ("napE", "\u{2A70}\u{338}", false),
    ("napid", "\u{224B}\u{338}", false),
    ("napos", "\u{149}", false),
    ("napprox", "\u{2249}", false),
    ("natur", "\u{266E}", false),
    ("natural", "\u{266E}", false),
    ("naturals", "\u{2115}", false),
    ("nbsp", "\u{A0}", true),
    ("nbump", "\u{224E}\u{338}", false),
    ("nbumpe", "\u{224F}\u{338}", false),
    ("ncap", "\u{2A43}", false),
    ("ncaron", "\u{148}", false),
    ("ncedil", "\u{146}", false),
    ("ncong", "\u{2247}", false),
    ("ncongdot", "\u{2A6D}\u{338}", false),
    ("ncup", "\u{2A42}", false),
    ("ncy", "\u{43D}", false),
    ("ndash", "\u{2013}", false),
    ("ne", "\u{2260}", false),
    ("neArr", "\u{21D7}", false),
    ("nearhk", "\u{2924}", false),
    ("nearr", "\u{2197}", false),
    ("nearrow", "\u{2197}", false),
    ("nedot", "\u{2250}\u{338}", false),
    ("nequiv", "\u{2262}", false),
    ("nesear", "\u{2928}", false),
    ("nesim", "\u{2242}\u{338}", false),
    ("nexist", "\u{2204}", false),
    ("nexists", "\u{2204}", false),
    ("nfr", "\u{1D52B}", false),
    ("ngE", "\u{2267}\u{338}", false),
    ("nge", "\u{2271}", false),
    ("ngeq", "\u{2271}", false),
    ("ngeqq", "\u{2267}\u{338}", false),
    ("ngeqslant", "\u{2A7E}\u{338}", false),
    ("nges", "\u{2A7E}\u{338}", false),
    ("ngsim", "\u{2275}", false),
    ("ngt", "\u{226F}", false),
    ("ngtr", "\u{226F}", false),
    ("nhArr", "\u{21CE}", false),
    ("nharr", "\u{21AE}", false),
    ("nhpar", "\u{2AF2}", false),
    ("ni", "\u{220B}", false),
    ("nis", "\u{22FC}", false),
    ("nisd", "\u{22FA}", false),
    ("niv", "\u{220B}", false),
    ("njcy", "\u{45A}", false),
    ("nlArr", "\u{21CD}", false),
    ("nlE", "\u{2266}\u{338}", false),
    ("nlarr", "\u{219A}", false),
    ("nldr", "\u{2025}", false),
    ("nle", "\u{2270}", false),
    ("nleftarrow", "\u{219A}", false),
    ("nleftrightarrow", "\u{21AE}", false),
    ("nleq", "\u{2270}", false),
    ("nleqq", "\u{2266}\u{338}", false),
    ("nleqslant", "\u{2A7D}\u{338}", false),
    ("nles", "\u{2A7D}\u{338}", false),
    ("nless", "\u{226E}", false),
    ("nlsim", "\u{2274}", false),
    ("nlt", "\u{226E}", false),
    ("nltri", "\u{22EA}", false),
    ("nltrie", "\u{22EC}", false),
    ("nmid", "\u{2224}", false),
    ("nopf", "\u{1D55F}", false),
    ("not", "\u{AC}", true),
    ("notin", "\u{2209}", false),
    ("notinE", "\u{22F9}\u{338}", false),
    ("notindot", "\u{22F5}\u{338}", false),
    ("notinva", "\u{2209}", false),
    ("notinvb", "\u{22F7}", false),
    ("notinvc", "\u{22F6}", false),
    ("notni", "\u{220C}", false),
    ("notniva", "\u{220C}", false),
    ("notnivb", "\u{22FE}", false),
    ("notnivc", "\u{22FD}", false),
    ("npar", "\u{2226}", false),
    ("nparallel", "\u{2226}", false),
    ("nparsl", "\u{2AFD}\u{20E5}", false),
    ("npart", "\u{2202}\u{338}", false),
    ("npolint", "\u{2A14}", false),
    ("npr", "\u{2280}", false),
    ("nprcue", "\u{22E0}", false),
    ("npre", "\u{2AAF}\u{338}", false),
    ("nprec", "\u{2280}", false),
    ("npreceq", "\u{2AAF}\u{338}", false),
    ("nrArr", "\u{21CF}", false),
    ("nrarr", "\u{219B}", false),
    ("nrarrc", "\u{2933}\u{338}", false),
    ("nrarrw", "\u{219D}\u{338}", false),
    ("nrightarrow", "\u{219B}", false),
    ("nrtri", "\u{22EB}", false),
    ("nrtrie", "\u{22ED}", false),
    ("nsc", "\u{2281}", false),
    ("nsccue", "\u{22E1}", false),
    ("nsce", "\u{2AB0}\u{338}", false),
    ("nscr", "\u{1D4C3}", false),
    ("nshortmid", "\u{2224}", false),
    ("nshortparallel", "\u{2226}", false),
    ("nsim", "\u{2241}", false),
    ("nsime", "\u{2244}", false),
    ("nsimeq", "\u{2244}", false),
    ("nsmid", "\u{2224}", false),
    ("nspar", "\u{2226}", false),
    ("nsqsube", "\u{22E2}", false),
    ("nsqsupe", "\u{22E3}", false),
    ("nsub", "\u{2284}", false),
    ("nsubE", "\u{2AC5}\u{338}", false),
    ("nsube", "\u{2288}", false),
    ("nsubset", "\u{2282}\u{20D2}", false),
    ("nsubseteq", "\u{2288}", false),
    ("nsubseteqq", "\u{2AC5}\u{338}", false),
    ("nsucc", "\u{2281}", false),
    ("nsucceq", "\u{2AB0}\u{338}", false),
    ("nsup", "\u{2285}", false),
    ("nsupE", "\u{2AC6}\u{338}", false),
    ("nsupe", "\u{2289}", false),
    ("nsupset", "\u{2283}\u{20D2}", false),
    ("nsupseteq", "\u{2289}", false),
    ("nsupseteqq", "\u{2AC6}\u{338}", false),
    ("ntgl", "\u{2279}", false),
    ("ntilde", "\u{F1}", true),
    ("ntlg", "\u{2278}", false),
    ("ntriangleleft", "\u{22EA}", false),
    ("ntrianglelefteq", "\u{22EC}", false),
    ("ntriangleright", "\u{22EB}", false),
    ("ntrianglerighteq", "\u{22ED}", false),
    ("nu", "\u{3BD}", false),
    ("num", "\u{23}", false),
    ("numero", "\u{2116}", false),
    ("numsp", "\u{2007}", false),
    ("nvDash", "\u{22AD}", false),
    ("nvHarr", "\u{2904}", false),
    ("nvap", "\u{224D}\u{20D2}", false),
    ("nvdash", "\u{22AC}", false),
    ("nvge", "\u{2265}\u{20D2}", false),
    ("nvgt", "\u{3E}\u{20D2}", false),
    ("nvinfin", "\u{29DE}", false),
    ("nvlArr", "\u{2902}", false),
    ("nvle", "\u{2264}\u{20D2}", false),
    ("nvlt", "\u{3C}\u{20D2}", false),
    ("nvltrie", "\u{22B4}\u{20D2}", false),
    ("nvrArr", "\u{2903}", false),
    ("nvrtrie", "\u{22B5}\u{20D2}", false),
    ("nvsim", "\u{223C}\u{20D2}", false),
    ("nwArr", "\u{21D6}", false),
    ("nwarhk", "\u{2923}", false),
    ("nwarr", "\u{2196}", false),
    ("nwarrow", "\u{2196}", false),
    ("nwnear", "\u{2927}", false),
    ("oS", "\u{24C8}", false),
    ("oacute", "\u{F3}", true),
    ("oast", "\u{229B}", false),
    ("ocir", "\u{229A}", false),
    ("ocirc", "\u{F4}", true),
    ("ocy", "\u{43E}", false),
    ("odash", "\u{229D}", false),
    ("odblac", "\u{151}", false),
    ("odiv", "\u{2A38}", false),
    ("odot", "\u{2299}", false),
    ("odsold", "\u{29BC}", false),
    ("oelig", "\u{153}", false),
    ("ofcir", "\u{29BF}", false),
    ("ofr", "\u{1D52C}", false),
    ("ogon", "\u{2DB}", false),
    ("ograve", "\u{F2}", true),
    ("ogt", "\u{29C1}", false),
    ("ohbar", "\u{29B5}", false),
    ("ohm", "\u{3A9}", false),
    ("oint", "\u{222E}", false),
    ("olarr", "\u{21BA}", false),
    ("olcir", "\u{29BE}", false),
    ("olcross", "\u{29BB}", false),
    ("oline", "\u{203E}", false),
    ("olt", "\u{29C0}", false),
    ("omacr", "\u{14D}", false),
    ("omega", "\u{3C9}", false),
    ("omicron", "\u{3BF}", false),
    ("omid", "\u{29B6}", false),
    ("ominus", "\u{2296}", false),
    ("oopf", "\u{1D560}", false),
    ("opar", "\u{29B7}", false),
    ("operp", "\u{29B9}", false),
    ("oplus", "\u{2295}", false),
    ("or", "\u{2228}", false),
    ("orarr", "\u{21BB}", false),
    ("ord", "\u{2A5D}", false),
    ("order", "\u{2134}", false),
    ("orderof", "\u{2134}", false),
    ("ordf", "\u{AA}", true),
    ("ordm", "\u{BA}", true),
    ("origof", "\u{22B6}", false),
    ("oror", "\u{2A56}", false),
    ("orslope", "\u{2A57}", false),
    ("orv", "\u{2A5B}", false),
    ("oscr", "\u{2134}", false),
    ("oslash", "\u{F8}", true),
    ("osol", "\u{2298}", false),
    ("otilde", "\u{F5}", true),
    ("otimes", "\u{2297}", false),
    ("otimesas", "\u{2A36}", false),
    ("ouml", "\u{F6}", true),
    ("ovbar", "\u{233D}", false),
    ("par", "\u{2225}", false),
    ("para", "\u{B6}", true),
    ("parallel", "\u{2225}", false),
    ("parsim", "\u{2AF3}", false),
    ("parsl", "\u{2AFD}", false),
    ("part", "\u{2202}", false),
    ("pcy", "\u{43F}", false),
    ("percnt", "\u{25}", false),
    ("period", "\u{2E}", false),
    ("permil", "\u{2030}", false),
    ("perp", "\u{22A5}", false),
    ("pertenk", "\u{2031}", false),
    ("pfr", "\u{1D52D}", false),
    ("phi", "\u{3C6}", false),
    ("phiv", "\u{3D5}", false),
    ("phmmat", "\u{2133}", false),
    ("phone", "\u{260E}", false),
    ("pi", "\u{3C0}", false),
    ("pitchfork", "\u{22D4}", false),
    ("piv", "\u{3D6}", false),
    ("planck", "\u{210F}", false),
    ("planckh", "\u{210E}", false),
    ("plankv", "\u{210F}", false),
    ("plus", "\u{2B}", false),
    ("plusacir", "\u{2A23}", false),
    ("plusb", "\u{229E}", false),
    ("pluscir", "\u{2A22}", false),
    ("plusdo", "\u{2214}", false),
    ("plusdu", "\u{2A25}", false),
    ("pluse", "\u{2A72}", false),
    ("plusmn", "\u{B1}", true),
    ("plussim", "\u{2A26}", false),
    ("plustwo", "\u{2A27}", false),
    ("pm", "\u{B1}", false),
    ("pointint", "\u{2A15}", false),
    ("popf", "\u{1D561}", false),
    ("pound", "\u{A3}", true),
    ("pr", "\u{227A}", false),
    ("prE", "\u{2AB3}", false),
    ("prap", "\u{2AB7}", false),
    ("prcue", "\u{227C}", false),
    ("pre", "\u{2AAF}", false),
    ("prec", "\u{227A}", false),
    ("precapprox", "\u{2AB7}", false),
    ("preccurlyeq", "\u{227C}", false),
    ("preceq", "\u{2AAF}", false),
    ("precnapprox", "\u{2AB9}", false),
    ("precneqq", "\u{2AB5}", false),
    ("precnsim", "\u{22E8}", false),
    ("precsim", "\u{227E}", false),
    ("prime", "\u{2032}", false),
    ("primes", "\u{2119}", false),
    ("prnE", "\u{2AB5}", false),
    ("prnap", "\u{2AB9}", false),
    ("prnsim", "\u{22E8}", false),
    ("prod", "\u{220F}", false),
    ("profalar", "\u{232E}", false),
    ("profline", "\u{2312}", false),
    ("profsurf", "\u{2313}", false),
    ("prop", "\u{221D}", false),
    ("propto", "\u{221D}", false),
    ("prsim", "\u{227E}", false),
    ("prurel", "\u{22B0}", false),
    ("pscr", "\u{1D4C5}", false),
    ("psi", "\u{3C8}", false),
    ("puncsp", "\u{2008}", false),
    ("qfr", "\u{1D52E}", false),
    ("qint", "\u{2A0C}", false),
    ("qopf", "\u{1D562}", false),
    ("qprime", "\u{2057}", false),
    ("qscr", "\u{1D4C6}", false),
    ("quaternions", "\u{210D}", false),
    ("quatint", "\u{2A16}", false),
    ("quest", "\u{3F}", false),
    ("questeq", "\u{225F}", false),
    ("quot", "\u{22}", true),
    ("rAarr", "\u{21DB}", false),
    ("rArr", "\u{21D2}", false),
    ("rAtail", "\u{291C}", false),
    ("rBarr", "\u{290F}", false),
    ("rHar", "\u{2964}", false),
    ("race", "\u{223D}\u{331}", false),
    ("racute", "\u{155}", false),
    ("radic", "\u{221A}", false),
    ("raemptyv", "\u{29B3}", false),
    ("rang", "\u{27E9}", false),
    ("rangd", "\u{2992}", false),
    ("range", "\u{29A5}", false),
    ("rangle", "\u{27E9}", false),
    ("raquo", "\u{BB}", true),
    ("rarr", "\u{2192}", false),
    ("rarrap", "\u{2975}", false),
    ("rarrb", "\u{21E5}", false),
    ("rarrbfs", "\u{2920}", false),
    ("rarrc", "\u{2933}", false),
    ("rarrfs", "\u{291E}", false),
    ("rarrhk", "\u{21AA}", false),
    ("rarrlp", "\u{21AC}", false),
    ("rarrpl", "\u{2945}", false),
    ("rarrsim", "\u{2974}", false),
    ("rarrtl", "\u{21A3}", false),
    ("rarrw", "\u{219D}", false),
    ("ratail", "\u{291A}", false),
    ("ratio", "\u{2236}", false),
    ("rationals", "\u{211A}", false),
    ("rbarr", "\u{290D}", false),
    ("rbbrk", "\u{2773}", false),
    ("rbrace", "\u{7D}", false),
    ("rbrack", "\u{5D}", false),
    ("rbrke", "\u{298C}", false),
    ("rbrksld", "\u{298E}", false),
    ("rbrkslu", "\u{2990}", false),
    ("rcaron", "\u{159}", false),
    ("rcedil", "\u{157}", false),
    ("rceil", "\u{2309}", false),
    ("rcub", "\u{7D}", false),
    ("rcy", "\u{440}", false),
    ("rdca", "\u{2937}", false),
    ("rdldhar", "\u{2969}", false),
    ("rdquo", "\u{201D}", false),
    ("rdquor", "\u{201D}", false),
    ("rdsh", "\u{21B3}", false),
    ("real", "\u{211C}", false),
    ("realine", "\u{211B}", false),
    ("realpart", "\u{211C}", false),
    ("reals", "\u{211D}", false),
    ("rect", "\u{25AD}", false),
    ("reg", "\u{AE}", true),
    ("rfisht", "\u{297D}", false),
    ("rfloor", "\u{230B}", false),
    ("rfr", "\u{1D52F}", false),
    ("rhard", "\u{21C1}", false),
    ("rharu", "\u{21C0}", false),
    ("rharul", "\u{296C}", false),
    ("rho", "\u{3C1}", false),
    ("rhov", "\u{3F1}", false),
    ("rightarrow", "\u{2192}", false),
    ("rightarrowtail", "\u{21A3}", false),
    ("rightharpoondown", "\u{21C1}", false),
    ("rightharpoonup", "\u{21C0}", false),
    ("rightleftarrows", "\u{21C4}", false),
    ("rightleftharpoons", "\u{21CC}", false),
    ("rightrightarrows", "\u{21C9}", false),
    ("rightsquigarrow", "\u{219D}", false),
    ("rightthreetimes", "\u{22CC}", false),
    ("ring", "\u{2DA}", false),
    ("risingdotseq", "\u{2253}", false),
    ("rlarr", "\u{21C4}", false),
    ("rlhar", "\u{21CC}", false),
    ("rlm", "\u{200F}", false),
    ("rmoust", "\u{23B1}", false),
    ("rmoustache", "\u{23B1}", false),
    ("rnmid", "\u{2AEE}", false),
    ("roang", "\u{27ED}", false),
    ("roarr", "\u{21FE}", false),
    ("robrk", "\u{27E7}", false),
    ("ropar", "\u{2986}", false),
    ("ropf", "\u{1D563}", false),
    ("roplus", "\u{2A2E}", false),
    ("rotimes", "\u{2A35}", false),
    ("rpar", "\u{29}", false),
    ("rpargt", "\u{2994}", false),
    ("rppolint", "\u{2A12}", false),
    ("rrarr", "\u{21C9}", false),
    ("rsaquo", "\u{203A}", false),
    ("rscr", "\u{1D4C7}", false),
    ("rsh", "\u{21B1}", false),
    ("rsqb", "\u{5D}", false),
    ("rsquo", "\u{2019}", false),
    ("rsquor", "\u{2019}", false),
    ("rthree", "\u{22CC}", false),
    ("rtimes", "\u{22CA}", false),
    ("rtri", "\u{25B9}", false),
    ("rtrie", "\u{22B5}", false),
    ("rtrif", "\u{25B8}", false),
    ("rtriltri", "\u{29CE}", false),
    ("ruluhar", "\u{2968}", false),
    ("rx", "\u{211E}", false),
    ("sacute", "\u{15B}", false),
    ("sbquo", "\u{201A}", false),
    ("sc", "\u{227B}", false),
    ("scE", "\u{2AB4}", false),
    ("scap", "\u{2AB8}", false),
    ("scaron", "\u{161}", false),
    ("sccue", "\u{227D}", false),
    ("sce", "\u{2AB0}", false),
    ("scedil", "\u{15F}", false),
    ("scirc", "\u{15D}", false),
    ("scnE", "\u{2AB6}", false),
    ("scnap", "\u{2ABA}", false),
    ("scnsim", "\u{22E9}", false),
    ("scpolint", "\u{2A13}", false),
    ("scsim", "\u{227F}", false),
    ("scy", "\u{441}", false),
    ("sdot", "\u{22C5}", false),
    ("sdotb", "\u{22A1}", false),
    ("sdote", "\u{2A66}", false),
    ("seArr", "\u{21D8}", false),
    ("searhk", "\u{2925}", false),
    ("searr", "\u{2198}", false),
    ("searrow", "\u{2198}", false),
    ("sect", "\u{A7}", true),
    ("semi", "\u{3B}", false),
    ("seswar", "\u{2929}", false),
    ("setminus", "\u{2216}", false),
    ("setmn", "\u{2216}", false),
    ("sext", "\u{2736}", false),
    ("sfr", "\u{1D530}", false),
    ("sfrown", "\u{2322}", false),
    ("sharp", "\u{266F}", false),
    ("shchcy", "\u{449}", false),
    ("shcy", "\u{448}", false),
    ("shortmid", "\u{2223}", false),
    ("shortparallel", "\u{2225}", false),
    ("shy", "\u{AD}", true),
    ("sigma", "\u{3C3}", false),
    ("sigmaf", "\u{3C2}", false),
    ("sigmav", "\u{3C2}", false),
    ("sim", "\u{223C}", false),
    ("simdot", "\u{2A6A}", false),
    ("sime", "\u{2243}", false),
    ("simeq", "\u{2243}", false),
    ("simg", "\u{2A9E}", false),
    ("simgE", "\u{2AA0}", false),
    ("siml", "\u{2A9D}", false),
    ("simlE", "\u{2A9F}", false),
    ("simne", "\u{2246}", false),
    ("simplus", "\u{2A24}", false),
    ("simrarr", "\u{2972}", false),
    ("slarr", "\u{2190}", false),
    ("smallsetminus", "\u{2216}", false),
    ("smashp", "\u{2A33}", false),
    ("smeparsl", "\u{29E4}", false),
    ("smid", "\u{2223}", false),
    ("smile", "\u{2323}", false),
    ("smt", "\u{2AAA}", false),
    ("smte", "\u{2AAC}", false),
    ("smtes", "\u{2AAC}\u{FE00}", false),
    ("softcy", "\u{44C}", false),
    ("sol", "\u{2F}", false),
    ("solb", "\u{29C4}", false),
    ("solbar", "\u{233F}", false),
    ("sopf", "\u{1D564}", false),
    ("spades", "\u{2660}", false),
    ("spadesuit", "\u{2660}", false),
    ("spar", "\u{2225}", false),
    ("sqcap", "\u{2293}", false),
    ("sqcaps", "\u{2293}\u{FE00}", false),
    ("sqcup", "\u{2294}", false),
    ("sqcups", "\u{2294}\u{FE00}", false),
    ("sqsub", "\u{228F}", false),
    ("sqsube", "\u{2291}", false),
    ("sqsubset", "\u{228F}", false),
    ("sqsubseteq", "\u{2291}", false),
    ("sqsup", "\u{2290}", false),
    ("sqsupe", "\u{2292}", false),
    ("sqsupset", "\u{2290}", false),
    ("sqsupseteq", "\u{2292}", false),
    ("squ", "\u{25A1}", false),
    ("square", "\u{25A1}", false),
    ("squarf", "\u{25AA}", false),
    ("squf", "\u{25AA}", false),
    ("srarr", "\u{2192}", false),
    ("sscr", "\u{1D4C8}", false),
    ("ssetmn", "\u{2216}", false),
    ("ssmile", "\u{2323}", false),
    ("sstarf", "\u{22C6}", false),
    ("star", "\u{2606}", false),
    ("starf", "\u{2605}", false),
    ("straightepsilon", "\u{3F5}", false),
    ("straightphi", "\u{3D5}", false),
    ("strns", "\u{AF}", false),
    ("sub", "\u{2282}", false),
    ("subE", "\u{2AC5}", false),
    ("subdot", "\u{2ABD}", false),
    ("sube", "\u{2286}", false),
    ("subedot", "\u{2AC3}", false),
    ("submult", "\u{2AC1}", false),
    ("subnE", "\u{2ACB}", false),
    ("subne", "\u{228A}", false),
    ("subplus", "\u{2ABF}", false),
    ("subrarr", "\u{2979}", false),
    ("subset", "\u{2282}", false),
    ("subseteq", "\u{2286}", false),
    ("subseteqq", "\u{2AC5}", false),
    ("subsetneq", "\u{228A}", false),
    ("subsetneqq", "\u{2ACB}", false),
    ("subsim", "\u{2AC7}", false),
    ("subsub", "\u{2AD5}", false),
    ("subsup", "\u{2AD3}", false),
    ("succ", "\u{227B}", false),
    ("succapprox", "\u{2AB8}", false),
    ("succcurlyeq", "\u{227D}", false),
    ("succeq", "\u{2AB0}", false),
    ("succnapprox", "\u{2ABA}", false),
    ("succneqq", "\u{2AB6}", false),
    ("succnsim", "\u{22E9}", false),
    ("succsim", "\u{227F}", false),
    ("sum", "\u{2211}", false),
    ("sung", "\u{266A}", false),
    ("sup", "\u{2283}", false),
    ("sup1", "\u{B9}", true),
    ("sup2", "\u{B2}", true),
    ("sup3", "\u{B3}", true),
    ("supE", "\u{2AC6}", false),
    ("supdot", "\u{2ABE}", false),
    ("supdsub", "\u{2AD8}", false),
    ("supe", "\u{2287}", false),
    ("supedot", "\u{2AC4}", false),
    ("suphsol", "\u{27C9}", false),
    ("suphsub", "\u{2AD7}", false),
    ("suplarr", "\u{297B}", false),
    ("supmult", "\u{2AC2}", false),
    ("supnE", "\u{2ACC}", false),
    ("supne", "\u{228B}", false),
    ("supplus", "\u{2AC0}", false),
    ("supset", "\u{2283}", false),
    ("supseteq", "\u{2287}", false),
    ("supseteqq", "\u{2AC6}", false),
    ("supsetneq", "\u{228B}", false),
    ("supsetneqq", "\u{2ACC}", false),
    ("supsim", "\u{2AC8}", false),
    ("supsub", "\u{2AD4}", false),
    ("supsup", "\u{2AD6}", false),
    ("swArr", "\u{21D9}", false),
    ("swarhk", "\u{2926}", false),
    ("swarr", "\u{2199}", false),
    ("swarrow", "\u{2199}", false),
    ("swnwar", "\u{292A}", false),
    ("szlig", "\u{DF}", true),
    ("target", "\u{2316}", false),
    ("tau", "\u{3C4}", false),
    ("tbrk", "\u{23B4}", false),
    ("tcaron", "\u{165}", false),
    ("tcedil", "\u{163}", false),
    ("tcy", "\u{442}", false),
    ("tdot", "\u{20DB}", false),
    ("telrec", "\u{2315}", false),
    ("tfr", "\u{1D531}", false),
    ("there4", "\u{2234}", false),
    ("therefore", "\u{2234}", false),
    ("theta", "\u{3B8}", false),
    ("thetasym", "\u{3D1}", false),
    ("thetav", "\u{3D1}", false),
    ("thickapprox", "\u{2248}", false),
    ("thicksim", "\u{223C}", false),
    ("thinsp", "\u{2009}", false),
    ("thkap", "\u{2248}", false),
    ("thksim", "\u{223C}", false),
    ("thorn", "\u{FE}", true),
    ("tilde", "\u{2DC}", false),
    ("times", "\u{D7}", true),
    ("timesb", "\u{22A0}", false),
    ("timesbar", "\u{2A31}", false),
    ("timesd", "\u{2A30}", false),
    ("tint", "\u{222D}", false),
    ("toea", "\u{2928}", false),
    ("top", "\u{22A4}", false),
    ("topbot", "\u{2336}", false),
    ("topcir", "\u{2AF1}", false),
    ("topf", "\u{1D565}", false),
    ("topfork", "\u{2ADA}", false),
    ("tosa", "\u{2929}", false),
    ("tprime", "\u{2034}", false),
    ("trade", "\u{2122}", false),
    ("triangle", "\u{25B5}", false),
    ("triangledown", "\u{25BF}", false),
    ("triangleleft", "\u{25C3}", false),
    ("trianglelefteq", "\u{22B4}", false),
    ("triangleq", "\u{225C}", false),
    ("triangleright", "\u{25B9}", false),
    ("trianglerighteq", "\u{22B5}", false),
    ("tridot", "\u{25EC}", false),
    ("trie", "\u{225C}", false),
    ("triminus", "\u{2A3A}", false),
    ("triplus", "\u{2A39}", false),
    ("trisb", "\u{29CD}", false),
    ("tritime", "\u{2A3B}", false),
    ("trpezium", "\u{23E2}", false),
    ("tscr", "\u{1D4C9}", false),
    ("tscy", "\u{446}", false),
    ("tshcy", "\u{45B}", false),
    ("tstrok", "\u{167}", false),
    ("twixt", "\u{226C}", false),
    ("twoheadleftarrow", "\u{219E}", false),
    ("twoheadrightarrow", "\u{21A0}", false),
    ("uArr", "\u{21D1}", false),
    ("uHar", "\u{2963}", false),
    ("uacute", "\u{FA}", true),
    ("uarr", "\u{2191}", false),
    ("ubrcy", "\u{45E}", false),
    ("ubreve", "\u{16D}", false),
    ("ucirc", "\u{FB}", true),
    ("ucy", "\u{443}", false),
    ("udarr", "\u{21C5}", false),
    ("udblac", "\u{171}", false),
    ("udhar", "\u{296E}", false),
    ("ufisht", "\u{297E}", false),
    ("ufr", "\u{1D532}", false),
    ("ugrave", "\u{F9}", true),
    ("uharl", "\u{21BF}", false),
    ("uharr", "\u{21BE}", false),
    ("uhblk", "\u{2580}", false),
    ("ulcorn", "\u{231C}", false),
    ("ulcorner", "\u{231C}", false),
    ("ulcrop", "\u{230F}", false),
    ("ultri", "\u{25F8}", false),
    ("umacr", "\u{16B}", false),
    ("uml", "\u{A8}", true),
    ("uogon", "\u{173}", false),
    ("uopf", "\u{1D566}", false),
    ("uparrow", "\u{2191}", false),
    ("updownarrow", "\u{2195}", false),
    ("upharpoonleft", "\u{21BF}", false),
    ("upharpoonright", "\u{21BE}", false),
    ("uplus", "\u{228E}", false),
    ("upsi", "\u{3C5}", false),
    ("upsih", "\u{3D2}", false),
    ("upsilon", "\u{3C5}", false),
    ("upuparrows", "\u{21C8}", false),
    ("urcorn", "\u{231D}", false),
    ("urcorner", "\u{231D}", false),
    ("urcrop", "\u{230E}", false),
    ("uring", "\u{16F}", false),
    ("urtri", "\u{25F9}", false),
    ("uscr", "\u{1D4CA}", false),
    ("utdot", "\u{22F0}", false),
    ("utilde", "\u{169}", false),
    ("utri", "\u{25B5}", false),
    ("utrif", "\u{25B4}", false),
    ("uuarr", "\u{21C8}", false),
    ("uuml", "\u{FC}", true),
    ("uwangle", "\u{29A7}", false),
    ("vArr", "\u{21D5}", false),
    ("vBar", "\u{2AE8}", false),
    ("vBarv", "\u{2AE9}", false),
    ("vDash", "\u{22A8}", false),
    ("vangrt", "\u{299C}", false),
    ("varepsilon", "\u{3F5}", false),
    ("varkappa", "\u{3F0}", false),
    ("varnothing", "\u{2205}", false),
    ("varphi", "\u{3D5}", false),
    ("varpi", "\u{3D6}", false),
    ("varpropto", "\u{221D}", false),
    ("varr", "\u{2195}", false),
    ("varrho", "\u{3F1}", false),
    ("varsigma", "\u{3C2}", false),
    ("varsubsetneq", "\u{228A}\u{FE00}", false),
    ("varsubsetneqq", "\u{2ACB}\u{FE00}", false),
    ("varsupsetneq", "\u{228B}\u{FE00}", false),
    ("varsupsetneqq", "\u{2ACC}\u{FE00}", false),
    ("vartheta", "\u{3D1}", false),
    ("vartriangleleft", "\u{22B2}", false),
    ("vartriangleright", "\u{22B3}", false),
    ("vcy", "\u{432}", false),
    ("vdash", "\u{22A2}", false),
    ("vee", "\u{2228}", false),
    ("veebar", "\u{22BB}", false),
    ("veeeq", "\u{225A}", false),
    ("vellip", "\u{22EE}", false),
    ("verbar", "\u{7C}", false),
    ("vert", "\u{7C}", false),
    ("vfr", "\u{1D533}", false),
    ("vltri", "\u{22B2}", false),
    ("vnsub", "\u{2282}\u{20D2}", false),
    ("vnsup", "\u{2283}\u{20D2}", false),
    ("vopf", "\u{1D567}", false),
    ("vprop", "\u{221D}", false),
    ("vrtri", "\u{22B3}", false),
    ("vscr", "\u{1D4CB}", false),
    ("vsubnE", "\u{2ACB}\u{FE00}", false),
    ("vsubne", "\u{228A}\u{FE00}", false),
    ("vsupnE", "\u{2ACC}\u{FE00}", false),
    ("vsupne", "\u{228B}\u{FE00}", false),
    ("vzigzag", "\u{299A}", false),
    ("wcirc", "\u{175}", false),
    ("wedbar", "\u{2A5F}", false),
    ("wedge", "\u{2227}", false),
    ("wedgeq", "\u{2259}", false),
    ("weierp", "\u{2118}", false),
    ("wfr", "\u{1D534}", false),
    ("wopf", "\u{1D568}", false),
    ("wp", "\u{2118}", false),
    ("wr", "\u{2240}", false),
    ("wreath", "\u{2240}", false),
    ("wscr", "\u{1D4CC}", false),
    ("xcap", "\u{22C2}", false),
    ("xcirc", "\u{25EF}", false),
    ("xcup", "\u{22C3}", false),
    ("xdtri", "\u{25BD}", false),
    ("xfr", "\u{1D535}", false),
    ("xhArr", "\u{27FA}", false),
    ("xharr", "\u{27F7}", false),
    ("xi", "\u{3BE}", false),
    ("xlArr", "\u{27F8}", false),
    ("xlarr", "\u{27F5}", false),
    ("xmap", "\u{27FC}", false),
    ("xnis", "\u{22FB}", false),
    ("xodot", "\u{2A00}", false),
    ("xopf", "\u{1D569}", false),
    ("xoplus", "\u{2A01}", false),
    ("xotime", "\u{2A02}", false),
    ("xrArr", "\u{27F9}", false),
    ("xrarr", "\u{27F6}", false),
    ("xscr", "\u{1D4CD}", false),
    ("xsqcup", "\u{2A06}", false),
    ("xuplus", "\u{2A04}", false),
    ("xutri", "\u{25B3}", false),
    ("xvee", "\u{22C1}", false),
    ("xwedge", "\u{22C0}", false),
    ("yacute", "\u{FD}", true),
    ("yacy", "\u{44F}", false),
    ("ycirc", "\u{177}", false),
    ("ycy", "\u{44B}", false),
    ("yen", "\u{A5}", true),
    ("yfr", "\u{1D536}", false),
    ("yicy", "\u{457}", false),
    ("yopf", "\u{1D56A}", false),
    ("yscr", "\u{1D4CE}", false),
    ("yucy", "\u{44E}", false),
    ("yuml", "\u{FF}", true),
    ("zacute", "\u{17A}", false),
    ("zcaron", "\u{17E}", false),
    ("zcy", "\u{437}", false),
    ("zdot", "\u{17C}", false),
    ("zeetrf", "\u{2128}", false),
    ("zeta", "\u{3B6}", false),
    ("zfr", "\u{1D537}", false),
    ("zhcy", "\u{436}", false),
    ("zigrarr", "\u{21DD}", false),
    ("zopf", "\u{1D56B}", false),
    ("zscr", "\u{1D4CF}", false),
    ("zwj", "\u{200D}", false),
    ("zwnj", "\u{200C}", false),
];

static TABLE: Lazy<FxHashMap<&'static str, (&'static str, bool)>> = Lazy::new(|| {
    NAMED_REFERENCES
        .iter()
        .map(|&(name, value, legacy)| (name, (value, legacy)))
        .collect()
});

/// Finds the longest named reference at the start of `rest` (the text right
/// after `&`).
///
/// A name followed by `;` wins; otherwise the longest legacy name that is a
/// prefix of the alphanumeric run matches without a semicolon.
pub fn match_named(rest: &str) -> Option<NamedMatch> {
    let run_len = rest
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();
    if run_len == 0 {
        return None;
    }
    let run = &rest[..run_len];

    if run_len <= MAX_NAME_LEN && rest.as_bytes().get(run_len) == Some(&b';') {
        if let Some(&(value, _)) = TABLE.get(run) {
            return Some(NamedMatch {
                len: run_len + 1,
                value,
                terminated: true,
            });
        }
    }

    (2..=run_len.min(MAX_NAME_LEN)).rev().find_map(|len| {
        match TABLE.get(&run[..len]) {
            Some(&(value, true)) => Some(NamedMatch {
                len,
                value,
                terminated: false,
            }),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminated_match() {
        assert_eq!(
            match_named("amp;rest"),
            Some(NamedMatch {
                len: 4,
                value: "&",
                terminated: true
            })
        );
    }

    #[test]
    fn test_longest_terminated_wins() {
        let m = match_named("notin;").unwrap();
        assert_eq!((m.len, m.value), (6, "\u{2209}"));
    }

    #[test]
    fn test_legacy_prefix_without_semicolon() {
        let m = match_named("notit;").unwrap();
        assert_eq!((m.len, m.value, m.terminated), (3, "\u{AC}", false));
    }

    #[test]
    fn test_non_legacy_requires_semicolon() {
        assert_eq!(match_named("hellip"), None);
        assert_eq!(match_named("hellip;").map(|m| m.value), Some("\u{2026}"));
    }

    #[test]
    fn test_unknown_reference() {
        assert_eq!(match_named("bogus;"), None);
        assert_eq!(match_named("bogus"), None);
    }

    #[test]
    fn test_html5_names() {
        assert_eq!(match_named("NewLine;").map(|m| m.value), Some("\n"));
        assert_eq!(match_named("lbrace;").map(|m| m.value), Some("{"));
        assert_eq!(match_named("check;").map(|m| m.value), Some("\u{2713}"));
        let m = match_named("CounterClockwiseContourIntegral;").unwrap();
        assert_eq!((m.len, m.value), (32, "\u{2233}"));
    }

    #[test]
    fn test_two_code_point_value() {
        let m = match_named("NotEqualTilde;").unwrap();
        assert_eq!(m.value, "\u{2242}\u{338}");
        assert!(m.terminated);
    }
}
