//! Canned CT acquisition sentences keyed by `<region>[_sub]<phase suffix>`.
//!
//! `{contrast}` marks where the contrast agent's display name is
//! substituted. A key missing from the table is a normal condition: the
//! engine falls back to sentence synthesis.

use std::collections::BTreeMap;

const CONTRAST_PLACEHOLDER: &str = "{contrast}";

static TEMPLATES: &[(&str, &str)] = &[
    // Encéphale
    (
        "crane_natif",
        "Acquisition volumique spiralée de l'encéphale en collimation submillimétrique. Reconstructions en coupes jointives de 3 mm selon les plans cantho-méatal et coronal.",
    ),
    (
        "crane_injecte",
        "Acquisition volumique spiralée de l'encéphale en collimation submillimétrique, avec injection IV bien tolérée de {contrast}. Reconstructions en coupes jointives de 3 mm selon les plans cantho-méatal et coronal.",
    ),
    (
        "crane_natif_injecte",
        "Acquisition volumique spiralée de l'encéphale en collimation submillimétrique, sans et avec injection IV bien tolérée de {contrast}. Reconstructions en coupes jointives de 3 mm selon les plans cantho-méatal et coronal.",
    ),
    // Angio TSA / Willis
    (
        "angioTSA_injecte",
        "Acquisition volumique spiralée de l'encéphale et des axes carotido-vertébraux en collimation submillimétrique, sans et avec injection IV bien tolérée de {contrast}. Reconstructions en coupes jointives de 3 mm de l'encéphale selon les plans cantho-méatal et frontal. Reconstructions axiales de 5 mm des axes carotido-vertébraux. Reconstructions 2D (MIP et MPR) de l'angioscanner cervical et du cercle de Willis.",
    ),
    (
        "crane_angioTSA_injecte",
        "Acquisition volumique spiralée de l'encéphale et des axes carotido-vertébraux en collimation submillimétrique, sans et avec injection IV bien tolérée de {contrast}. Reconstructions en coupes jointives de 3 mm de l'encéphale selon les plans cantho-méatal et frontal. Reconstructions axiales de 5 mm des axes carotido-vertébraux. Reconstructions 2D (MIP et MPR) de l'angioscanner cervical et du cercle de Willis.",
    ),
    // Massif facial / sinus / orbites / rochers
    (
        "sinus_natif",
        "Acquisition volumique spiralée des sinus en collimation submillimétrique. Reconstructions en coupes jointives de 1.5 mm dans le plan axial. Reconstructions 2D (MPR) dans les plans coronal et sagittal.",
    ),
    (
        "massifFacial_natif",
        "Acquisition volumique spiralée du massif facial en collimation submillimétrique. Reconstructions en coupes jointives de 1.5 mm dans le plan axial. Reconstructions 2D (MPR) dans les plans coronal et sagittal.",
    ),
    (
        "massifFacial_injecte",
        "Acquisition volumique spiralée du massif facial en collimation submillimétrique avec injection IV bien tolérée de {contrast}. Reconstructions en coupes jointives de 1.5 mm dans le plan axial. Reconstructions 2D (MPR) dans les plans coronal et sagittal.",
    ),
    (
        "orbites_natif_injecte",
        "Acquisition volumique spiralée des orbites en collimation submillimétrique sans et avec injection IV bien tolérée de {contrast}. Reconstructions en coupes jointives de 1.5 mm dans le plan axial. Reconstructions 2D (MPR) dans les plans coronal et sagittal.",
    ),
    (
        "orbites_injecte",
        "Acquisition volumique spiralée des orbites en collimation submillimétrique avec injection IV bien tolérée de {contrast}. Reconstructions en coupes jointives de 1.5 mm dans le plan axial. Reconstructions 2D (MPR) dans les plans coronal et sagittal.",
    ),
    (
        "rochers_natif",
        "Acquisition volumique spiralée des rochers en collimation submillimétrique. Reconstructions en coupes jointives millimétriques dans le plan axial. Reconstructions 2D (MPR) panoramiques et para-axiales.",
    ),
    // Thorax
    (
        "thorax_natif",
        "Acquisition volumique spiralée en collimation submillimétrique du thorax. Reconstructions en coupes jointives millimétriques dans les plans axial et frontal. Reconstructions 2D (MIP/MinIP) dans le plan axial et reconstructions 2D dans les plans coronal et sagittal de la colonne.",
    ),
    (
        "thorax_natif_injecte",
        "Acquisition volumique spiralée en collimation millimétrique du thorax sans et avec injection IV bien tolérée de {contrast}. Reconstructions en coupes jointives axiales de 5 mm. Reconstructions 2D (MPR) dans les plans coronal et sagittal de la colonne.",
    ),
    (
        "thorax_mixte",
        "Acquisition volumique spiralée en collimation millimétrique du thorax avec injection IV bien tolérée de {contrast}, phase mixte (3 min). Reconstructions en coupes jointives axiales de 5 mm. Reconstructions 2D (MPR) dans les plans coronal et sagittal de la colonne.",
    ),
    // Abdomen-pelvis
    (
        "ap_natif",
        "Acquisition volumique spiralée en collimation millimétrique de l'abdomen et du pelvis sans injection de produit de contraste IV. Reconstructions en coupes jointives axiales de 5 mm. Reconstructions 2D (MPR) dans les plans coronal et sagittal de la colonne.",
    ),
    (
        "ap_injecte",
        "Acquisition volumique spiralée en collimation millimétrique de l'abdomen et du pelvis avec injection IV bien tolérée de {contrast}. Reconstructions en coupes jointives axiales de 5 mm. Reconstructions 2D (MPR) dans les plans coronal et sagittal de la colonne.",
    ),
    (
        "ap_natif_injecte",
        "Acquisition volumique spiralée en collimation millimétrique de l'abdomen et du pelvis sans et avec injection IV bien tolérée de {contrast}. Reconstructions en coupes jointives axiales de 5 mm. Reconstructions 2D (MPR) dans les plans coronal et sagittal de la colonne.",
    ),
    // Thorax-abdomen-pelvis
    (
        "tap_injecte",
        "Acquisition volumique spiralée en collimation millimétrique du thorax, de l'abdomen et du pelvis avec injection IV bien tolérée de {contrast}. Reconstructions en coupes jointives de 5 mm dans le plan axial. Reconstructions 2D (MPR) dans les plans coronal et sagittal de la colonne.",
    ),
    // Aorte / membres inférieurs
    (
        "aorte_ap_mi_injecte",
        "Acquisition volumique spiralée en collimation millimétrique du thorax, de l'abdomen, du pelvis et des membres inférieurs après injection IV bien tolérée de {contrast}. Reconstructions en coupes jointives axiales de 5 mm. Reconstructions 2D (MPR, MIP) multiplanaires et reconstruction 3D (VRT).",
    ),
];

/// All catalog keys, in table order.
pub fn template_keys() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|(key, _)| *key)
}

/// Look up one template and substitute the contrast agent name.
///
/// Any string is accepted as the contrast name and inserted verbatim.
pub fn template_for(key: &str, contrast: &str) -> Option<String> {
    TEMPLATES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| text.replace(CONTRAST_PLACEHOLDER, contrast))
}

/// The full catalog for one contrast agent.
pub fn template_catalog(contrast: &str) -> BTreeMap<&'static str, String> {
    TEMPLATES
        .iter()
        .map(|(key, text)| (*key, text.replace(CONTRAST_PLACEHOLDER, contrast)))
        .collect()
}
