use super::Element;

pub(super) const ELEMENTS: &[Element] = &[
    Element::new(1, "H", "Hydrogen", 1, Some(1)),
    Element::new(2, "He", "Helium", 1, Some(18)),
    Element::new(3, "Li", "Lithium", 2, Some(1)),
    Element::new(4, "Be", "Beryllium", 2, Some(2)),
    Element::new(5, "B", "Boron", 2, Some(13)),
    Element::new(6, "C", "Carbon", 2, Some(14)),
    Element::new(7, "N", "Nitrogen", 2, Some(15)),
    Element::new(8, "O", "Oxygen", 2, Some(16)),
    Element::new(9, "F", "Fluorine", 2, Some(17)),
    Element::new(10, "Ne", "Neon", 2, Some(18)),
    Element::new(11, "Na", "Sodium", 3, Some(1)),
    Element::new(12, "Mg", "Magnesium", 3, Some(2)),
    Element::new(13, "Al", "Aluminium", 3, Some(13)),
    Element::new(14, "Si", "Silicon", 3, Some(14)),
    Element::new(15, "P", "Phosphorus", 3, Some(15)),
    Element::new(16, "S", "Sulfur", 3, Some(16)),
    Element::new(17, "Cl", "Chlorine", 3, Some(17)),
    Element::new(18, "Ar", "Argon", 3, Some(18)),
    Element::new(19, "K", "Potassium", 4, Some(1)),
    Element::new(20, "Ca", "Calcium", 4, Some(2)),
    Element::new(21, "Sc", "Scandium", 4, Some(3)),
    Element::new(22, "Ti", "Titanium", 4, Some(4)),
    Element::new(23, "V", "Vanadium", 4, Some(5)),
    Element::new(24, "Cr", "Chromium", 4, Some(6)),
    Element::new(25, "Mn", "Manganese", 4, Some(7)),
    Element::new(26, "Fe", "Iron", 4, Some(8)),
    Element::new(27, "Co", "Cobalt", 4, Some(9)),
    Element::new(28, "Ni", "Nickel", 4, Some(10)),
    Element::new(29, "Cu", "Copper", 4, Some(11)),
    Element::new(30, "Zn", "Zinc", 4, Some(12)),
    Element::new(31, "Ga", "Gallium", 4, Some(13)),
    Element::new(32, "Ge", "Germanium", 4, Some(14)),
    Element::new(33, "As", "Arsenic", 4, Some(15)),
    Element::new(34, "Se", "Selenium", 4, Some(16)),
    Element::new(35, "Br", "Bromine", 4, Some(17)),
    Element::new(36, "Kr", "Krypton", 4, Some(18)),
    Element::new(37, "Rb", "Rubidium", 5, Some(1)),
    Element::new(38, "Sr", "Strontium", 5, Some(2)),
    Element::new(39, "Y", "Yttrium", 5, Some(3)),
    Element::new(40, "Zr", "Zirconium", 5, Some(4)),
    Element::new(41, "Nb", "Niobium", 5, Some(5)),
    Element::new(42, "Mo", "Molybdenum", 5, Some(6)),
    Element::new(43, "Tc", "Technetium", 5, Some(7)),
    Element::new(44, "Ru", "Ruthenium", 5, Some(8)),
    Element::new(45, "Rh", "Rhodium", 5, Some(9)),
    Element::new(46, "Pd", "Palladium", 5, Some(10)),
    Element::new(47, "Ag", "Silver", 5, Some(11)),
    Element::new(48, "Cd", "Cadmium", 5, Some(12)),
    Element::new(49, "In", "Indium", 5, Some(13)),
    Element::new(50, "Sn", "Tin", 5, Some(14)),
    Element::new(51, "Sb", "Antimony", 5, Some(15)),
    Element::new(52, "Te", "Tellurium", 5, Some(16)),
    Element::new(53, "I", "Iodine", 5, Some(17)),
    Element::new(54, "Xe", "Xenon", 5, Some(18)),
    Element::new(55, "Cs", "Caesium", 6, Some(1)),
    Element::new(56, "Ba", "Barium", 6, Some(2)),
    Element::new(57, "La", "Lanthanum", 6, None),
    Element::new(58, "Ce", "Cerium", 6, None),
    Element::new(59, "Pr", "Praseodymium", 6, None),
    Element::new(60, "Nd", "Neodymium", 6, None),
    Element::new(61, "Pm", "Promethium", 6, None),
    Element::new(62, "Sm", "Samarium", 6, None),
    Element::new(63, "Eu", "Europium", 6, None),
    Element::new(64, "Gd", "Gadolinium", 6, None),
    Element::new(65, "Tb", "Terbium", 6, None),
    Element::new(66, "Dy", "Dysprosium", 6, None),
    Element::new(67, "Ho", "Holmium", 6, None),
    Element::new(68, "Er", "Erbium", 6, None),
    Element::new(69, "Tm", "Thulium", 6, None),
    Element::new(70, "Yb", "Ytterbium", 6, None),
    Element::new(71, "Lu", "Lutetium", 6, None),
    Element::new(72, "Hf", "Hafnium", 6, Some(4)),
    Element::new(73, "Ta", "Tantalum", 6, Some(5)),
    Element::new(74, "W", "Tungsten", 6, Some(6)),
    Element::new(75, "Re", "Rhenium", 6, Some(7)),
    Element::new(76, "Os", "Osmium", 6, Some(8)),
    Element::new(77, "Ir", "Iridium", 6, Some(9)),
    Element::new(78, "Pt", "Platinum", 6, Some(10)),
    Element::new(79, "Au", "Gold", 6, Some(11)),
    Element::new(80, "Hg", "Mercury", 6, Some(12)),
    Element::new(81, "Tl", "Thallium", 6, Some(13)),
    Element::new(82, "Pb", "Lead", 6, Some(14)),
    Element::new(83, "Bi", "Bismuth", 6, Some(15)),
    Element::new(84, "Po", "Polonium", 6, Some(16)),
    Element::new(85, "At", "Astatine", 6, Some(17)),
    Element::new(86, "Rn", "Radon", 6, Some(18)),
    Element::new(87, "Fr", "Francium", 7, Some(1)),
    Element::new(88, "Ra", "Radium", 7, Some(2)),
    Element::new(89, "Ac", "Actinium", 7, None),
    Element::new(90, "Th", "Thorium", 7, None),
    Element::new(91, "Pa", "Protactinium", 7, None),
    Element::new(92, "U", "Uranium", 7, None),
    Element::new(93, "Np", "Neptunium", 7, None),
    Element::new(94, "Pu", "Plutonium", 7, None),
    Element::new(95, "Am", "Americium", 7, None),
    Element::new(96, "Cm", "Curium", 7, None),
    Element::new(97, "Bk", "Berkelium", 7, None),
    Element::new(98, "Cf", "Californium", 7, None),
    Element::new(99, "Es", "Einsteinium", 7, None),
    Element::new(100, "Fm", "Fermium", 7, None),
    Element::new(101, "Md", "Mendelevium", 7, None),
    Element::new(102, "No", "Nobelium", 7, None),
    Element::new(103, "Lr", "Lawrencium", 7, None),
    Element::new(104, "Rf", "Rutherfordium", 7, Some(4)),
    Element::new(105, "Db", "Dubnium", 7, Some(5)),
    Element::new(106, "Sg", "Seaborgium", 7, Some(6)),
    Element::new(107, "Bh", "Bohrium", 7, Some(7)),
    Element::new(108, "Hs", "Hassium", 7, Some(8)),
    Element::new(109, "Mt", "Meitnerium", 7, Some(9)),
    Element::new(110, "Ds", "Darmstadtium", 7, Some(10)),
    Element::new(111, "Rg", "Roentgenium", 7, Some(11)),
    Element::new(112, "Cn", "Copernicium", 7, Some(12)),
    Element::new(113, "Nh", "Nihonium", 7, Some(13)),
    Element::new(114, "Fl", "Flerovium", 7, Some(14)),
    Element::new(115, "Mc", "Moscovium", 7, Some(15)),
    Element::new(116, "Lv", "Livermorium", 7, Some(16)),
    Element::new(117, "Ts", "Tennessine", 7, Some(17)),
    Element::new(118, "Og", "Oganesson", 7, Some(18)),
];
