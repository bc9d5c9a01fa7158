/// Watch brand samples with their (standard, alphanumeric) keys.
#[allow(dead_code)]
pub const SAMPLE_BRANDS: &[(&str, &str, &str)] = &[
    ("Tissot T Sport Quakeren Chronograph", "tissot t sport quakeren", "tissottsportquakeren"),
    ("Piaget PS 535 Chronographe", "piaget ps 535", "piagetps535"),
    ("Rolex Submariner GMT", "rolex submariner", "rolexsubmariner"),
    ("Patek Philippe Nautilus", "patek philippe nautilus", "patekphilippenautilus"),
    ("Omega Seamaster Professional", "omega seamaster", "omegaseamaster"),
    ("Breitling Navitimer", "breitling navitimer", "breitlingnavitimer"),
    ("IWC Schaffhausen Original", "iwc schaffhausen", "iwcschaffhausen"),
    ("Porsche Design Chronograph", "porsche", "porsche"),
    ("Tag Heuer Monaco Cal.2", "tag heuer monaco cal2", "tagheuermonacocal2"),
    ("Audemars Piguet Royal Oak", "audemars piguet royal oak", "audemarspiguetroyaloak"),
    ("A. Lange & Söhne Datograph", "a lange sohne datograph", "alangesohnedatograph"),
    ("Jaeger-LeCoultre Master Control", "jaeger lecoultre master control", "jaegerlecoultremastercontrol"),
    ("Vacheron Constantin Patrimony", "vacheron constantin patrimony", "vacheronconstantinpatrimony"),
    ("Girard-Perregaux Laureato", "girard perregaux laureato", "girardperregauxlaureato"),
    ("F.P. Journe Élégante", "fp journe elegante", "fpjourneelegante"),
    ("Rolex Cosmograph Daytona", "rolex cosmograph daytona", "rolexcosmographdaytona"),
    (
        "Omega Speedmaster Moonwatch Professional",
        "omega speedmaster moonwatch",
        "omegaspeedmastermoonwatch",
    ),
];
