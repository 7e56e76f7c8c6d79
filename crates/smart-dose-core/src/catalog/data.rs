//! Built-in medicine catalog and the prescriber's quick-add list.

use crate::models::{DrugSchedule, MedicationType, Medicine, QuickAddOption, UnitType};

pub(super) struct MedicineSeed {
    id: &'static str,
    name: &'static str,
    generic_name: &'static str,
    brand: &'static str,
    dosages: &'static [&'static str],
    medication_type: MedicationType,
    category: &'static str,
    schedule: DrugSchedule,
    side_effects: &'static [&'static str],
    contraindications: &'static [&'static str],
    interactions: &'static [&'static str],
    usage_notes: &'static str,
    incentive_per_unit: u32,
    unit_type: UnitType,
    in_stock: bool,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl From<&MedicineSeed> for Medicine {
    fn from(seed: &MedicineSeed) -> Self {
        Medicine {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            generic_name: seed.generic_name.to_string(),
            brand: seed.brand.to_string(),
            dosages: strings(seed.dosages),
            medication_type: seed.medication_type,
            category: seed.category.to_string(),
            schedule: seed.schedule,
            side_effects: strings(seed.side_effects),
            contraindications: strings(seed.contraindications),
            interactions: strings(seed.interactions),
            usage_notes: seed.usage_notes.to_string(),
            incentive_per_unit: seed.incentive_per_unit,
            unit_type: seed.unit_type,
            in_stock: seed.in_stock,
        }
    }
}

pub(super) fn medicines() -> Vec<Medicine> {
    MEDICINES.iter().map(Medicine::from).collect()
}

pub(super) fn quick_add_options() -> Vec<QuickAddOption> {
    QUICK_ADD
        .iter()
        .map(|(name, dosage, category)| QuickAddOption::new(name, dosage, category))
        .collect()
}

/// (name, dosage, category)
static QUICK_ADD: &[(&str, &str, &str)] = &[
    ("Metformin", "500mg", "Diabetes"),
    ("Metformin", "850mg", "Diabetes"),
    ("Glimepiride", "1mg", "Diabetes"),
    ("Glimepiride", "2mg", "Diabetes"),
    ("Gliclazide", "80mg", "Diabetes"),
    ("Insulin", "10 units", "Diabetes"),
    ("Sitagliptin", "100mg", "Diabetes"),
    ("Telmisartan", "40mg", "Hypertension"),
    ("Telmisartan", "80mg", "Hypertension"),
    ("Amlodipine", "5mg", "Hypertension"),
    ("Amlodipine", "10mg", "Hypertension"),
    ("Losartan", "50mg", "Hypertension"),
    ("Metoprolol", "25mg", "Hypertension"),
    ("Propranolol", "40mg", "Hypertension"),
    ("Atorvastatin", "20mg", "Cholesterol"),
    ("Rosuvastatin", "10mg", "Cholesterol"),
    ("Paracetamol", "500mg", "Pain & Fever"),
    ("Paracetamol", "650mg", "Pain & Fever"),
    ("Ibuprofen", "400mg", "Pain & Fever"),
    ("Diclofenac", "50mg", "Pain & Fever"),
    ("Aceclofenac", "100mg", "Pain & Fever"),
    ("Omeprazole", "20mg", "Gastric"),
    ("Pantoprazole", "40mg", "Gastric"),
    ("Cetirizine", "10mg", "Allergy"),
    ("Montelukast", "10mg", "Allergy"),
    ("Azithromycin", "500mg", "Antibiotics"),
    ("Amoxicillin", "500mg", "Antibiotics"),
    ("Ciprofloxacin", "500mg", "Antibiotics"),
    ("Vitamin D", "60,000 IU", "Vitamins"),
    ("Vitamin B12", "1500mcg", "Vitamins"),
    ("Calcium", "500mg", "Vitamins"),
    ("Iron", "100mg", "Vitamins"),
    ("Levothyroxine", "75mcg", "Thyroid"),
    ("Sumatriptan", "50mg", "Neurology"),
    ("Pregabalin", "75mg", "Neurology"),
    ("Thiocolchicoside", "4mg", "Orthopaedic"),
    ("Salbutamol Inhaler", "100mcg", "Respiratory"),
];

static MEDICINES: &[MedicineSeed] = &[
    MedicineSeed {
        id: "MED-001",
        name: "Metformin",
        generic_name: "Metformin Hydrochloride",
        brand: "Glucophage / Glycomet",
        dosages: &["250mg", "500mg", "850mg", "1000mg"],
        medication_type: MedicationType::Tablet,
        category: "Diabetes",
        schedule: DrugSchedule::H,
        side_effects: &["Nausea", "Diarrhea", "Abdominal discomfort", "Metallic taste"],
        contraindications: &["Renal impairment", "Hepatic disease", "Alcoholism"],
        interactions: &["Iodinated contrast agents", "Alcohol", "Cimetidine"],
        usage_notes: "Take with food. Start with low dose and titrate up. Monitor renal function.",
        incentive_per_unit: 8,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-002",
        name: "Glimepiride",
        generic_name: "Glimepiride",
        brand: "Amaryl / Glimisave",
        dosages: &["1mg", "2mg", "3mg", "4mg"],
        medication_type: MedicationType::Tablet,
        category: "Diabetes",
        schedule: DrugSchedule::H,
        side_effects: &["Hypoglycemia", "Weight gain", "Dizziness", "Nausea"],
        contraindications: &["Type 1 Diabetes", "Diabetic ketoacidosis", "Severe hepatic impairment"],
        interactions: &["Beta-blockers", "NSAIDs", "Warfarin"],
        usage_notes: "Take with breakfast. Educate patient about hypoglycemia signs. Carry glucose tablets.",
        incentive_per_unit: 10,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-003",
        name: "Sitagliptin",
        generic_name: "Sitagliptin Phosphate",
        brand: "Januvia / Istavel",
        dosages: &["25mg", "50mg", "100mg"],
        medication_type: MedicationType::Tablet,
        category: "Diabetes",
        schedule: DrugSchedule::H,
        side_effects: &["Upper respiratory infection", "Headache", "Nasopharyngitis"],
        contraindications: &["History of pancreatitis", "Severe renal impairment"],
        interactions: &["Digoxin", "Other DPP-4 inhibitors"],
        usage_notes: "Can be taken with or without food. Low risk of hypoglycemia as monotherapy.",
        incentive_per_unit: 35,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-004",
        name: "Insulin Glargine",
        generic_name: "Insulin Glargine",
        brand: "Lantus / Basalog",
        dosages: &["100 IU/mL"],
        medication_type: MedicationType::Injection,
        category: "Diabetes",
        schedule: DrugSchedule::H,
        side_effects: &["Hypoglycemia", "Injection site reaction", "Weight gain", "Lipodystrophy"],
        contraindications: &["Hypoglycemia episodes"],
        interactions: &["Beta-blockers", "ACE inhibitors", "Oral anti-diabetics"],
        usage_notes: "Inject subcutaneously once daily at the same time. Rotate injection sites.",
        incentive_per_unit: 120,
        unit_type: UnitType::Pen,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-010",
        name: "Telmisartan",
        generic_name: "Telmisartan",
        brand: "Telma / Telsartan",
        dosages: &["20mg", "40mg", "80mg"],
        medication_type: MedicationType::Tablet,
        category: "Hypertension",
        schedule: DrugSchedule::H,
        side_effects: &["Dizziness", "Back pain", "Diarrhea", "Upper respiratory infection"],
        contraindications: &["Pregnancy", "Bilateral renal artery stenosis", "Hyperkalemia"],
        interactions: &["NSAIDs", "Potassium supplements", "Lithium"],
        usage_notes: "Take at the same time daily. Monitor potassium and renal function.",
        incentive_per_unit: 12,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-011",
        name: "Amlodipine",
        generic_name: "Amlodipine Besylate",
        brand: "Amlong / Amlokind",
        dosages: &["2.5mg", "5mg", "10mg"],
        medication_type: MedicationType::Tablet,
        category: "Hypertension",
        schedule: DrugSchedule::H,
        side_effects: &["Ankle edema", "Flushing", "Headache", "Dizziness", "Palpitations"],
        contraindications: &["Severe aortic stenosis", "Unstable angina", "Cardiogenic shock"],
        interactions: &["Simvastatin (high doses)", "CYP3A4 inhibitors", "Cyclosporine"],
        usage_notes: "Can be taken with or without food. May cause peripheral edema.",
        incentive_per_unit: 7,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-012",
        name: "Losartan",
        generic_name: "Losartan Potassium",
        brand: "Losacar / Repace",
        dosages: &["25mg", "50mg", "100mg"],
        medication_type: MedicationType::Tablet,
        category: "Hypertension",
        schedule: DrugSchedule::H,
        side_effects: &["Dizziness", "Nasal congestion", "Back pain", "Fatigue"],
        contraindications: &["Pregnancy", "Severe hepatic impairment"],
        interactions: &["NSAIDs", "Potassium-sparing diuretics", "Lithium"],
        usage_notes: "Take once or twice daily. Good option for diabetic patients with proteinuria.",
        incentive_per_unit: 14,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-013",
        name: "Metoprolol",
        generic_name: "Metoprolol Succinate",
        brand: "Betaloc / Met XL",
        dosages: &["12.5mg", "25mg", "50mg", "100mg"],
        medication_type: MedicationType::Tablet,
        category: "Hypertension",
        schedule: DrugSchedule::H,
        side_effects: &["Bradycardia", "Fatigue", "Cold extremities", "Dizziness"],
        contraindications: &["Heart block", "Severe bradycardia", "Decompensated heart failure"],
        interactions: &["Verapamil", "Clonidine", "MAOIs"],
        usage_notes: "Do not stop abruptly; taper gradually. Monitor heart rate.",
        incentive_per_unit: 9,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-020",
        name: "Atorvastatin",
        generic_name: "Atorvastatin Calcium",
        brand: "Lipitor / Atorva",
        dosages: &["10mg", "20mg", "40mg", "80mg"],
        medication_type: MedicationType::Tablet,
        category: "Cholesterol",
        schedule: DrugSchedule::H,
        side_effects: &["Muscle pain", "Liver enzyme elevation", "Headache", "Nausea"],
        contraindications: &["Active liver disease", "Pregnancy", "Breastfeeding"],
        interactions: &["Cyclosporine", "Clarithromycin", "Gemfibrozil", "Grapefruit juice"],
        usage_notes: "Take at bedtime for best effect. Monitor liver function periodically.",
        incentive_per_unit: 18,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-021",
        name: "Rosuvastatin",
        generic_name: "Rosuvastatin Calcium",
        brand: "Crestor / Rosuvas",
        dosages: &["5mg", "10mg", "20mg", "40mg"],
        medication_type: MedicationType::Tablet,
        category: "Cholesterol",
        schedule: DrugSchedule::H,
        side_effects: &["Myalgia", "Headache", "Abdominal pain", "Weakness"],
        contraindications: &["Active liver disease", "Pregnancy", "Severe renal impairment"],
        interactions: &["Cyclosporine", "Warfarin", "Antacids"],
        usage_notes: "Can be taken any time of day. Most potent statin per mg.",
        incentive_per_unit: 22,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-030",
        name: "Paracetamol",
        generic_name: "Acetaminophen",
        brand: "Crocin / Dolo",
        dosages: &["325mg", "500mg", "650mg"],
        medication_type: MedicationType::Tablet,
        category: "Pain & Fever",
        schedule: DrugSchedule::Otc,
        side_effects: &["Liver damage (overdose)", "Nausea", "Rash (rare)"],
        contraindications: &["Severe hepatic impairment", "Active liver disease"],
        interactions: &["Warfarin", "Alcohol", "Isoniazid"],
        usage_notes: "Max 4g/day in adults. Avoid with alcohol. Safe in pregnancy (short term).",
        incentive_per_unit: 3,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-031",
        name: "Ibuprofen",
        generic_name: "Ibuprofen",
        brand: "Brufen / Combiflam",
        dosages: &["200mg", "400mg", "600mg"],
        medication_type: MedicationType::Tablet,
        category: "Pain & Fever",
        schedule: DrugSchedule::H,
        side_effects: &["GI upset", "Gastric ulcers", "Renal impairment", "Dizziness"],
        contraindications: &["Active GI bleeding", "Severe renal impairment", "Third trimester pregnancy"],
        interactions: &["Aspirin", "Anticoagulants", "ACE inhibitors", "Corticosteroids"],
        usage_notes: "Take with food. Avoid long-term use. Not recommended in dengue.",
        incentive_per_unit: 6,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-032",
        name: "Diclofenac",
        generic_name: "Diclofenac Sodium",
        brand: "Voveran / Voltaren",
        dosages: &["25mg", "50mg", "75mg SR"],
        medication_type: MedicationType::Tablet,
        category: "Pain & Fever",
        schedule: DrugSchedule::H,
        side_effects: &["GI disturbance", "Headache", "Edema", "Hepatotoxicity"],
        contraindications: &["GI bleeding", "Severe heart failure", "Hepatic porphyria"],
        interactions: &["Anticoagulants", "Lithium", "Methotrexate", "Digoxin"],
        usage_notes: "Take with food. Short-term use preferred. Monitor renal/hepatic function.",
        incentive_per_unit: 8,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-040",
        name: "Azithromycin",
        generic_name: "Azithromycin Dihydrate",
        brand: "Zithromax / Azithral",
        dosages: &["250mg", "500mg"],
        medication_type: MedicationType::Tablet,
        category: "Antibiotics",
        schedule: DrugSchedule::H1,
        side_effects: &["Diarrhea", "Nausea", "Abdominal pain", "Headache"],
        contraindications: &["Hypersensitivity to macrolides", "Severe hepatic impairment"],
        interactions: &["Antacids", "Warfarin", "Cyclosporine", "Digoxin"],
        usage_notes: "Take 1 hour before or 2 hours after meals. Complete full course.",
        incentive_per_unit: 20,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-041",
        name: "Amoxicillin",
        generic_name: "Amoxicillin Trihydrate",
        brand: "Mox / Novamox",
        dosages: &["250mg", "500mg"],
        medication_type: MedicationType::Capsule,
        category: "Antibiotics",
        schedule: DrugSchedule::H1,
        side_effects: &["Diarrhea", "Rash", "Nausea", "Vomiting"],
        contraindications: &["Penicillin allergy", "Infectious mononucleosis"],
        interactions: &["Methotrexate", "Probenecid", "Oral contraceptives"],
        usage_notes: "Can be taken with or without food. Complete full course. Check for penicillin allergy.",
        incentive_per_unit: 10,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-042",
        name: "Ciprofloxacin",
        generic_name: "Ciprofloxacin Hydrochloride",
        brand: "Ciplox / Cifran",
        dosages: &["250mg", "500mg", "750mg"],
        medication_type: MedicationType::Tablet,
        category: "Antibiotics",
        schedule: DrugSchedule::H1,
        side_effects: &["Nausea", "Diarrhea", "Tendon damage", "Photosensitivity"],
        contraindications: &["Children < 18 years", "Pregnancy", "Tendon disorders with fluoroquinolones"],
        interactions: &["Antacids", "Theophylline", "Warfarin", "NSAIDs"],
        usage_notes: "Avoid dairy products 2 hours before/after. Stay hydrated. Avoid sun exposure.",
        incentive_per_unit: 14,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-043",
        name: "Cefixime",
        generic_name: "Cefixime Trihydrate",
        brand: "Taxim-O / Zifi",
        dosages: &["100mg", "200mg", "400mg"],
        medication_type: MedicationType::Tablet,
        category: "Antibiotics",
        schedule: DrugSchedule::H1,
        side_effects: &["Diarrhea", "Abdominal pain", "Nausea", "Headache"],
        contraindications: &["Cephalosporin allergy", "Severe penicillin allergy (cross-reactivity)"],
        interactions: &["Anticoagulants", "Probenecid"],
        usage_notes: "Can be taken with or without food. Complete full course.",
        incentive_per_unit: 16,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-050",
        name: "Pantoprazole",
        generic_name: "Pantoprazole Sodium",
        brand: "Pan / Pantocid",
        dosages: &["20mg", "40mg"],
        medication_type: MedicationType::Tablet,
        category: "Gastric",
        schedule: DrugSchedule::H,
        side_effects: &["Headache", "Diarrhea", "Flatulence", "Abdominal pain"],
        contraindications: &["Hypersensitivity to PPIs"],
        interactions: &["Clopidogrel", "Methotrexate", "Ketoconazole"],
        usage_notes: "Take 30 minutes before meals on empty stomach. Avoid long-term use without review.",
        incentive_per_unit: 10,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-051",
        name: "Omeprazole",
        generic_name: "Omeprazole",
        brand: "Omez / Prilosec",
        dosages: &["10mg", "20mg", "40mg"],
        medication_type: MedicationType::Capsule,
        category: "Gastric",
        schedule: DrugSchedule::H,
        side_effects: &["Headache", "Nausea", "Abdominal pain", "Vitamin B12 deficiency (long-term)"],
        contraindications: &["Hypersensitivity to PPIs"],
        interactions: &["Clopidogrel", "Diazepam", "Phenytoin"],
        usage_notes: "Take before meals. Do not crush capsule. Limit to 8 weeks when possible.",
        incentive_per_unit: 10,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-052",
        name: "Domperidone",
        generic_name: "Domperidone",
        brand: "Domstal / Motilium",
        dosages: &["10mg"],
        medication_type: MedicationType::Tablet,
        category: "Gastric",
        schedule: DrugSchedule::H,
        side_effects: &["Dry mouth", "Headache", "Galactorrhoea", "QT prolongation (rare)"],
        contraindications: &["Prolactinoma", "GI hemorrhage", "Cardiac conduction disorders"],
        interactions: &["Ketoconazole", "Erythromycin", "QT-prolonging drugs"],
        usage_notes: "Take 15-30 min before meals. Max 30mg/day. Short-term use.",
        incentive_per_unit: 5,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-060",
        name: "Cetirizine",
        generic_name: "Cetirizine Dihydrochloride",
        brand: "Zyrtec / Cetzine",
        dosages: &["5mg", "10mg", "5mg/5mL syrup"],
        medication_type: MedicationType::Tablet,
        category: "Allergy",
        schedule: DrugSchedule::Otc,
        side_effects: &["Drowsiness", "Dry mouth", "Fatigue", "Headache"],
        contraindications: &["Severe renal impairment (without dose adjustment)"],
        interactions: &["CNS depressants", "Alcohol", "Theophylline"],
        usage_notes: "Can cause drowsiness. Take at bedtime if needed. Reduce dose in renal impairment.",
        incentive_per_unit: 5,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-061",
        name: "Montelukast",
        generic_name: "Montelukast Sodium",
        brand: "Singulair / Montair",
        dosages: &["4mg", "5mg", "10mg"],
        medication_type: MedicationType::Tablet,
        category: "Respiratory",
        schedule: DrugSchedule::H,
        side_effects: &["Headache", "Abdominal pain", "Behavioural changes (rare)", "Dream abnormalities"],
        contraindications: &["Phenylketonuria (chewable tabs contain phenylalanine)"],
        interactions: &["Phenobarbital", "Rifampin"],
        usage_notes: "Take at bedtime. Not for acute asthma attacks. Monitor for mood changes.",
        incentive_per_unit: 14,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-062",
        name: "Salbutamol",
        generic_name: "Salbutamol Sulfate",
        brand: "Asthalin / Ventolin",
        dosages: &["2mg tablet", "100mcg/puff inhaler", "2mg/5mL syrup"],
        medication_type: MedicationType::Inhaler,
        category: "Respiratory",
        schedule: DrugSchedule::H,
        side_effects: &["Tremor", "Palpitations", "Headache", "Muscle cramps"],
        contraindications: &["Hypertrophic obstructive cardiomyopathy"],
        interactions: &["Beta-blockers", "MAOIs", "Tricyclic antidepressants"],
        usage_notes: "Shake inhaler well. Use spacer for better delivery. Max 8 puffs/day.",
        incentive_per_unit: 45,
        unit_type: UnitType::Inhaler,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-070",
        name: "Aspirin",
        generic_name: "Acetylsalicylic Acid",
        brand: "Ecosprin / Disprin",
        dosages: &["75mg", "150mg", "325mg"],
        medication_type: MedicationType::Tablet,
        category: "Cardiac",
        schedule: DrugSchedule::Otc,
        side_effects: &["GI bleeding", "Tinnitus", "Bruising", "Dyspepsia"],
        contraindications: &["Active bleeding", "Peptic ulcer", "Aspirin allergy", "Children with viral illness"],
        interactions: &["Anticoagulants", "NSAIDs", "Methotrexate", "SSRIs"],
        usage_notes: "Take with food. Low-dose for cardiac protection. Avoid in dengue.",
        incentive_per_unit: 4,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-071",
        name: "Clopidogrel",
        generic_name: "Clopidogrel Bisulfate",
        brand: "Plavix / Clopilet",
        dosages: &["75mg", "150mg"],
        medication_type: MedicationType::Tablet,
        category: "Cardiac",
        schedule: DrugSchedule::H,
        side_effects: &["Bleeding", "Bruising", "Diarrhea", "Rash"],
        contraindications: &["Active bleeding", "Severe hepatic impairment"],
        interactions: &["Omeprazole", "NSAIDs", "Warfarin"],
        usage_notes: "Do not stop without medical advice. Discontinue 5-7 days before surgery.",
        incentive_per_unit: 10,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-080",
        name: "Levothyroxine",
        generic_name: "Levothyroxine Sodium",
        brand: "Thyronorm / Eltroxin",
        dosages: &["12.5mcg", "25mcg", "50mcg", "75mcg", "100mcg", "150mcg"],
        medication_type: MedicationType::Tablet,
        category: "Thyroid",
        schedule: DrugSchedule::H,
        side_effects: &["Palpitations", "Weight loss", "Tremor", "Insomnia"],
        contraindications: &["Thyrotoxicosis", "Untreated adrenal insufficiency"],
        interactions: &["Calcium supplements", "Iron supplements", "Antacids", "Soy products"],
        usage_notes: "Take on empty stomach 30-60 min before breakfast. Separate from calcium/iron by 4 hours.",
        incentive_per_unit: 6,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-090",
        name: "Vitamin D3",
        generic_name: "Cholecalciferol",
        brand: "D-Rise / Uprise",
        dosages: &["1000 IU", "2000 IU", "60,000 IU (sachet)"],
        medication_type: MedicationType::Tablet,
        category: "Vitamins & Supplements",
        schedule: DrugSchedule::Otc,
        side_effects: &["Hypercalcemia (excess)", "Nausea", "Constipation"],
        contraindications: &["Hypercalcemia", "Vitamin D toxicity"],
        interactions: &["Thiazide diuretics", "Digoxin"],
        usage_notes: "60,000 IU weekly for deficiency. Take with fatty food for absorption.",
        incentive_per_unit: 18,
        unit_type: UnitType::Sachet,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-091",
        name: "Calcium + Vitamin D3",
        generic_name: "Calcium Carbonate + Cholecalciferol",
        brand: "Shelcal / CCM",
        dosages: &["500mg+250IU", "1000mg+200IU"],
        medication_type: MedicationType::Tablet,
        category: "Vitamins & Supplements",
        schedule: DrugSchedule::Otc,
        side_effects: &["Constipation", "Bloating", "Gas"],
        contraindications: &["Hypercalcemia", "Renal calculi"],
        interactions: &["Thyroid hormones", "Tetracycline", "Bisphosphonates"],
        usage_notes: "Take with meals. Space 2 hours from thyroid medication. Avoid with high-oxalate foods.",
        incentive_per_unit: 12,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-092",
        name: "Iron + Folic Acid",
        generic_name: "Ferrous Fumarate + Folic Acid",
        brand: "Autrin / Fefol",
        dosages: &["100mg+0.5mg", "150mg+0.5mg"],
        medication_type: MedicationType::Tablet,
        category: "Vitamins & Supplements",
        schedule: DrugSchedule::Otc,
        side_effects: &["Constipation", "Black stools", "Nausea", "Metallic taste"],
        contraindications: &["Hemochromatosis", "Hemolytic anemia"],
        interactions: &["Antacids", "Tetracycline", "Calcium supplements", "Tea/Coffee"],
        usage_notes: "Take on empty stomach with vitamin C for better absorption. Separate from tea by 2 hours.",
        incentive_per_unit: 8,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-100",
        name: "Clotrimazole",
        generic_name: "Clotrimazole",
        brand: "Candid / Canesten",
        dosages: &["1% cream", "1% dusting powder"],
        medication_type: MedicationType::Cream,
        category: "Dermatology",
        schedule: DrugSchedule::Otc,
        side_effects: &["Local irritation", "Burning sensation", "Redness"],
        contraindications: &["Hypersensitivity to azole antifungals"],
        interactions: &["None significant for topical use"],
        usage_notes: "Apply 2-3 times daily. Continue for 2 weeks after symptoms resolve.",
        incentive_per_unit: 25,
        unit_type: UnitType::Tube,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-101",
        name: "Betamethasone",
        generic_name: "Betamethasone Valerate",
        brand: "Betnovate / Diprosone",
        dosages: &["0.05% cream", "0.1% cream"],
        medication_type: MedicationType::Cream,
        category: "Dermatology",
        schedule: DrugSchedule::H,
        side_effects: &["Skin thinning", "Stretch marks", "Acne", "Pigmentation changes"],
        contraindications: &["Skin infections", "Rosacea", "Perioral dermatitis"],
        interactions: &["None significant for topical use"],
        usage_notes: "Apply thin layer. Do not use on face/groin long-term. Taper, don't stop abruptly.",
        incentive_per_unit: 35,
        unit_type: UnitType::Tube,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-110",
        name: "Sumatriptan",
        generic_name: "Sumatriptan Succinate",
        brand: "Suminat / Imitrex",
        dosages: &["25mg", "50mg", "100mg"],
        medication_type: MedicationType::Tablet,
        category: "Neurology",
        schedule: DrugSchedule::H,
        side_effects: &["Tingling", "Flushing", "Dizziness", "Chest tightness"],
        contraindications: &["Ischemic heart disease", "Uncontrolled hypertension", "Basilar migraine"],
        interactions: &["SSRIs/SNRIs (serotonin syndrome)", "MAOIs", "Ergotamine"],
        usage_notes: "Take at onset of migraine. Max 200mg/day. Not for prevention.",
        incentive_per_unit: 28,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-111",
        name: "Pregabalin",
        generic_name: "Pregabalin",
        brand: "Lyrica / Pregastar",
        dosages: &["50mg", "75mg", "150mg", "300mg"],
        medication_type: MedicationType::Capsule,
        category: "Neurology",
        schedule: DrugSchedule::H,
        side_effects: &["Dizziness", "Drowsiness", "Weight gain", "Blurred vision"],
        contraindications: &["Galactose intolerance"],
        interactions: &["CNS depressants", "Alcohol", "Opioids"],
        usage_notes: "Taper gradually when stopping. May impair driving. Adjust dose in renal impairment.",
        incentive_per_unit: 20,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-120",
        name: "Aceclofenac",
        generic_name: "Aceclofenac",
        brand: "Zerodol / Hifenac",
        dosages: &["100mg", "200mg SR"],
        medication_type: MedicationType::Tablet,
        category: "Orthopaedic",
        schedule: DrugSchedule::H,
        side_effects: &["GI disturbance", "Dizziness", "Hepatic enzyme elevation"],
        contraindications: &["GI bleeding", "Severe hepatic impairment", "Renal failure"],
        interactions: &["Anticoagulants", "Lithium", "Diuretics"],
        usage_notes: "Take with food. Short courses preferred. Monitor liver function.",
        incentive_per_unit: 10,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
    MedicineSeed {
        id: "MED-121",
        name: "Thiocolchicoside",
        generic_name: "Thiocolchicoside",
        brand: "Myoril / Myospaz",
        dosages: &["4mg", "8mg"],
        medication_type: MedicationType::Capsule,
        category: "Orthopaedic",
        schedule: DrugSchedule::H,
        side_effects: &["Drowsiness", "Diarrhea", "Nausea", "Allergic reactions"],
        contraindications: &["Pregnancy", "Breastfeeding", "Epilepsy"],
        interactions: &["CNS depressants", "Alcohol"],
        usage_notes: "Muscle relaxant. Max 7 days of oral use. Take after meals.",
        incentive_per_unit: 12,
        unit_type: UnitType::Strip,
        in_stock: true,
    },
];
