//! Built-in named color table
//!
//! French color names grouped by family (Violet, Orange, Marron, Rose, Vert,
//! Bleu, Jaune, Rouge, Gris, Noir, Blanc). Several names share a hex code and
//! a few hex codes appear under two families; table order decides which
//! record wins an exact or tied match.

use super::ColorRecord;

/// Default palette, in match priority order
pub static DEFAULT_COLORS: &[ColorRecord] = &[
    ColorRecord::from_static("370028", "Violet", "Aubergine"),
    ColorRecord::from_static("6600FF", "Violet", "Bleu persan"),
    ColorRecord::from_static("BD33A4", "Violet", "Byzantin"),
    ColorRecord::from_static("702963", "Violet", "Byzantium"),
    ColorRecord::from_static("DE3163", "Violet", "Cerise"),
    ColorRecord::from_static("6A455D", "Violet", "Colombin"),
    ColorRecord::from_static("FD3F92", "Violet", "Fushia"),
    ColorRecord::from_static("C9A0DC", "Violet", "Glycine"),
    ColorRecord::from_static("D2CAEC", "Violet", "Gris de lin"),
    ColorRecord::from_static("DF73FF", "Violet", "Héliotrope"),
    ColorRecord::from_static("791CF8", "Violet", "Indigo"),
    ColorRecord::from_static("2E006C", "Violet", "Indigo"),
    ColorRecord::from_static("9683EC", "Violet", "Lavande"),
    ColorRecord::from_static("AC1E44", "Violet", "Lie de vin"),
    ColorRecord::from_static("B666D2", "Violet", "Lilas"),
    ColorRecord::from_static("FF00FF", "Violet", "Magenta"),
    ColorRecord::from_static("800080", "Violet", "Magenta foncé"),
    ColorRecord::from_static("DB0073", "Violet", "Magenta fushia"),
    ColorRecord::from_static("D473D4", "Violet", "Mauve"),
    ColorRecord::from_static("DA70D6", "Violet", "Orchidée"),
    ColorRecord::from_static("CFA0E9", "Violet", "Parme"),
    ColorRecord::from_static("9E0E40", "Violet", "Pourpre"),
    ColorRecord::from_static("811453", "Violet", "Prune"),
    ColorRecord::from_static("F9429E", "Violet", "Rose bonbon"),
    ColorRecord::from_static("FF007F", "Violet", "Rose vif"),
    ColorRecord::from_static("C71585", "Violet", "Rouge-violet"),
    ColorRecord::from_static("723E64", "Violet", "Violet d'évêque"),
    ColorRecord::from_static("A10684", "Violet", "Violine"),
    ColorRecord::from_static("6C0277", "Violet", "Zinzolin"),
    ColorRecord::from_static("ED7F10", "Orange", "Orange"),
    ColorRecord::from_static("E67E30", "Orange", "Abricot"),
    ColorRecord::from_static("FFCB60", "Orange", "Aurore"),
    ColorRecord::from_static("F1E2BE", "Orange", "Bis"),
    ColorRecord::from_static("FFE4C4", "Orange", "Bisque"),
    ColorRecord::from_static("F4661B", "Orange", "Carotte"),
    ColorRecord::from_static("DF6D14", "Orange", "Citrouille"),
    ColorRecord::from_static("E73E01", "Orange", "Corail"),
    ColorRecord::from_static("B36700", "Orange", "Cuivre"),
    ColorRecord::from_static("EF9B0F", "Orange", "Gomme-gutte"),
    ColorRecord::from_static("FEA347", "Orange", "Mandarine"),
    ColorRecord::from_static("DE9816", "Orange", "Melon"),
    ColorRecord::from_static("FAA401", "Orange", "Orangé"),
    ColorRecord::from_static("CC5500", "Orange", "Orange brûlée"),
    ColorRecord::from_static("AD4F09", "Orange", "Roux"),
    ColorRecord::from_static("F3D617", "Orange", "Safran"),
    ColorRecord::from_static("F88E55", "Orange", "Saumon"),
    ColorRecord::from_static("FF7F00", "Orange", "Tangerine"),
    ColorRecord::from_static("A75502", "Orange", "Tanné"),
    ColorRecord::from_static("E1CE9A", "Orange", "Vanille"),
    ColorRecord::from_static("E9C9B1", "Orange", "Ventre de biche"),
    ColorRecord::from_static("5B3C11", "Marron", "Brun"),
    ColorRecord::from_static("88421D", "Marron", "Acajou"),
    ColorRecord::from_static("A76726", "Marron", "Alezan"),
    ColorRecord::from_static("F0C300", "Marron", "Ambre"),
    ColorRecord::from_static("9D3E0C", "Marron", "Auburn"),
    ColorRecord::from_static("8B6C42", "Marron", "Basané"),
    ColorRecord::from_static("C8AD7F", "Marron", "Beige"),
    ColorRecord::from_static("F5F5DC", "Marron", "Beige clair"),
    ColorRecord::from_static("AFA778", "Marron", "Beigeasse"),
    ColorRecord::from_static("3D2B1F", "Marron", "Bistre"),
    ColorRecord::from_static("856D4D", "Marron", "Bistre"),
    ColorRecord::from_static("4E3D28", "Marron", "Bitume"),
    ColorRecord::from_static("5B3C11", "Marron", "Blet"),
    ColorRecord::from_static("842E1B", "Marron", "Brique"),
    ColorRecord::from_static("614E1A", "Marron", "Bronze"),
    ColorRecord::from_static("3F2204", "Marron", "Brou de noix"),
    ColorRecord::from_static("3F2204", "Marron", "Bureau"),
    ColorRecord::from_static("614B3A", "Marron", "Cacao"),
    ColorRecord::from_static("2F1B0C", "Marron", "Cachou"),
    ColorRecord::from_static("462E01", "Marron", "Café"),
    ColorRecord::from_static("785E2F", "Marron", "Café au lait"),
    ColorRecord::from_static("7E5835", "Marron", "Cannelle"),
    ColorRecord::from_static("7E3300", "Marron", "Caramel"),
    ColorRecord::from_static("806D5A", "Marron", "Châtaigne"),
    ColorRecord::from_static("8B6C42", "Marron", "Châtain"),
    ColorRecord::from_static("85530F", "Marron", "Chaudron"),
    ColorRecord::from_static("5A3A22", "Marron", "Chocolat"),
    ColorRecord::from_static("DF6D14", "Marron", "Citrouille"),
    ColorRecord::from_static("AD4F09", "Marron", "Fauve"),
    ColorRecord::from_static("99512B", "Marron", "Feuille-morte"),
    ColorRecord::from_static("BBAE98", "Marron", "Grège"),
    ColorRecord::from_static("685E43", "Marron", "Gris de maure"),
    ColorRecord::from_static("8F5922", "Marron", "Lavallière"),
    ColorRecord::from_static("582900", "Marron", "Marron"),
    ColorRecord::from_static("87591A", "Marron", "Mordoré"),
    ColorRecord::from_static("955628", "Marron", "Noisette"),
    ColorRecord::from_static("CC5500", "Marron", "Orange brûlée"),
    ColorRecord::from_static("4E1609", "Marron", "Puce"),
    ColorRecord::from_static("A5260A", "Marron", "Rouge bismarck"),
    ColorRecord::from_static("AE4A34", "Marron", "Rouge tomette"),
    ColorRecord::from_static("985717", "Marron", "Rouille"),
    ColorRecord::from_static("730800", "Marron", "Sang de boeuf"),
    ColorRecord::from_static("8D4024", "Marron", "Senois"),
    ColorRecord::from_static("A98C78", "Marron", "Sépia"),
    ColorRecord::from_static("AE8964", "Marron", "Sépia"),
    ColorRecord::from_static("9F551E", "Marron", "Tabac"),
    ColorRecord::from_static("8E5434", "Marron", "Terre de Sienne"),
    ColorRecord::from_static("625B48", "Marron", "Terre d'ombre"),
    ColorRecord::from_static("926D27", "Marron", "Terre d'ombre"),
    ColorRecord::from_static("E1CE9A", "Marron", "Vanille"),
    ColorRecord::from_static("FD6C9E", "Rose", "Rose"),
    ColorRecord::from_static("FFE4C4", "Rose", "Bisque"),
    ColorRecord::from_static("DE3163", "Rose", "Cerise"),
    ColorRecord::from_static("FEC3AC", "Rose", "Chair"),
    ColorRecord::from_static("FDE9E0", "Rose", "Coquille d'oeuf"),
    ColorRecord::from_static("FEE7F0", "Rose", "Cuisse de nymphe"),
    ColorRecord::from_static("C72C48", "Rose", "Framboise"),
    ColorRecord::from_static("FD3F92", "Rose", "Fushia"),
    ColorRecord::from_static("DF73FF", "Rose", "Héliotrope"),
    ColorRecord::from_static("FE96A0", "Rose", "Incarnadin"),
    ColorRecord::from_static("FF00FF", "Rose", "Magenta"),
    ColorRecord::from_static("800080", "Rose", "Magenta foncé"),
    ColorRecord::from_static("DB0073", "Rose", "Magenta fushia"),
    ColorRecord::from_static("D473D4", "Rose", "Mauve"),
    ColorRecord::from_static("FDBFB7", "Rose", "Pêche"),
    ColorRecord::from_static("C4698F", "Rose", "Rose balais"),
    ColorRecord::from_static("F9429E", "Rose", "Rose bonbon"),
    ColorRecord::from_static("FEBFD2", "Rose", "Rose dragée"),
    ColorRecord::from_static("997A8D", "Rose", "Rose Mountbatten"),
    ColorRecord::from_static("FF866A", "Rose", "Rose thé"),
    ColorRecord::from_static("FF007F", "Rose", "Rose vif"),
    ColorRecord::from_static("F88E55", "Rose", "Saumon"),
    ColorRecord::from_static("00FF00", "Vert", "Vert"),
    ColorRecord::from_static("79F8F8", "Vert", "Aigue-marine"),
    ColorRecord::from_static("7BA05B", "Vert", "Asperge"),
    ColorRecord::from_static("008E8E", "Vert", "Bleu sarcelle"),
    ColorRecord::from_static("048B9A", "Vert", "Canard"),
    ColorRecord::from_static("83A697", "Vert", "Céladon"),
    ColorRecord::from_static("80D0D0", "Vert", "Givré"),
    ColorRecord::from_static("649B88", "Vert", "Glauque"),
    ColorRecord::from_static("1B4F08", "Vert", "Hooker"),
    ColorRecord::from_static("87E990", "Vert", "Jade"),
    ColorRecord::from_static("94812B", "Vert", "Kaki"),
    ColorRecord::from_static("16B84E", "Vert", "Menthe"),
    ColorRecord::from_static("54F98D", "Vert", "Menthe à l'eau"),
    ColorRecord::from_static("149414", "Vert", "Sinople"),
    ColorRecord::from_static("25FDE9", "Vert", "Turquoise"),
    ColorRecord::from_static("7FDD4C", "Vert", "Vert absinthe"),
    ColorRecord::from_static("82C46C", "Vert", "Vert amande"),
    ColorRecord::from_static("18391E", "Vert", "Vert anglais"),
    ColorRecord::from_static("9FE855", "Vert", "Vert anis"),
    ColorRecord::from_static("568203", "Vert", "Vert avocat"),
    ColorRecord::from_static("096A09", "Vert", "Vert bouteille"),
    ColorRecord::from_static("C2F732", "Vert", "Vert chartreuse"),
    ColorRecord::from_static("00FF00", "Vert", "Vert citron"),
    ColorRecord::from_static("18391E", "Vert", "Vert de chrome"),
    ColorRecord::from_static("95A595", "Vert", "Vert de gris"),
    ColorRecord::from_static("22780F", "Vert", "Vert de vessie"),
    ColorRecord::from_static("B0F2B6", "Vert", "Vert d'eau"),
    ColorRecord::from_static("01D758", "Vert", "Vert émeraude"),
    ColorRecord::from_static("00561B", "Vert", "Vert empire"),
    ColorRecord::from_static("175732", "Vert", "Vert épinard"),
    ColorRecord::from_static("3A9D23", "Vert", "Vert gazon"),
    ColorRecord::from_static("00561B", "Vert", "Vert impérial"),
    ColorRecord::from_static("798933", "Vert", "Vert kaki"),
    ColorRecord::from_static("85C17E", "Vert", "Vert lichen"),
    ColorRecord::from_static("9EFD38", "Vert", "Vert lime"),
    ColorRecord::from_static("1FA055", "Vert", "Vert malachite"),
    ColorRecord::from_static("386F48", "Vert", "Vert mélèse"),
    ColorRecord::from_static("596643", "Vert", "Vert militaire"),
    ColorRecord::from_static("679F5A", "Vert", "Vert mousse"),
    ColorRecord::from_static("708D23", "Vert", "Vert olive"),
    ColorRecord::from_static("97DFC6", "Vert", "Vert opaline"),
    ColorRecord::from_static("3AF24B", "Vert", "Vert perroquet"),
    ColorRecord::from_static("01796F", "Vert", "Vert pin"),
    ColorRecord::from_static("BEF574", "Vert", "Vert pistache"),
    ColorRecord::from_static("4CA66B", "Vert", "Vert poireau"),
    ColorRecord::from_static("34C924", "Vert", "Vert pomme"),
    ColorRecord::from_static("57D53B", "Vert", "Vert prairie"),
    ColorRecord::from_static("4CA66B", "Vert", "Vert prasin"),
    ColorRecord::from_static("00FE7E", "Vert", "Vert printemps"),
    ColorRecord::from_static("095228", "Vert", "Vert sapin"),
    ColorRecord::from_static("689D71", "Vert", "Vert sauge"),
    ColorRecord::from_static("01D758", "Vert", "Vert smaragdin"),
    ColorRecord::from_static("A5D152", "Vert", "Vert tilleul"),
    ColorRecord::from_static("586F2D", "Vert", "Vert véronèse"),
    ColorRecord::from_static("40826D", "Vert", "Vert viride"),
    ColorRecord::from_static("0000FF", "Bleu", "Bleu"),
    ColorRecord::from_static("79F8F8", "Bleu", "Aigue-marine"),
    ColorRecord::from_static("F0FFFF", "Bleu", "Azur brume"),
    ColorRecord::from_static("007FFF", "Bleu", "Azur"),
    ColorRecord::from_static("1E7FCB", "Bleu", "Azur"),
    ColorRecord::from_static("74D0F1", "Bleu", "Azur clair"),
    ColorRecord::from_static("A9EAFE", "Bleu", "Azurin"),
    ColorRecord::from_static("3A8EBA", "Bleu", "Bleu clair"),
    ColorRecord::from_static("686F8C", "Bleu", "Bleu ardoise"),
    ColorRecord::from_static("5472AE", "Bleu", "Bleur barbeau"),
    ColorRecord::from_static("5472AE", "Bleu", "Bleu bleuet"),
    ColorRecord::from_static("0095B6", "Bleu", "Bleu bondi"),
    ColorRecord::from_static("26C4EC", "Bleu", "Bleu céleste"),
    ColorRecord::from_static("0F9DE8", "Bleu", "Bleu céruléen"),
    ColorRecord::from_static("357AB7", "Bleu", "Bleu céruléen"),
    ColorRecord::from_static("8EA2C6", "Bleu", "Bleu charette"),
    ColorRecord::from_static("17657D", "Bleu", "Bleu charron"),
    ColorRecord::from_static("8EA2C6", "Bleu", "Bleu charron"),
    ColorRecord::from_static("77B5FE", "Bleu", "Bleu ciel"),
    ColorRecord::from_static("22427C", "Bleu", "Bleu cobalt"),
    ColorRecord::from_static("24445C", "Bleu", "Bleu de berlin"),
    ColorRecord::from_static("318CE7", "Bleu", "Bleu de france"),
    ColorRecord::from_static("003366", "Bleu", "Bleu de minuit"),
    ColorRecord::from_static("24445C", "Bleu", "Bleu de Prusse"),
    ColorRecord::from_static("1560BD", "Bleu", "Bleu denim"),
    ColorRecord::from_static("00CCCB", "Bleu", "Mers du sud"),
    ColorRecord::from_static("DFF2FF", "Bleu", "Bleu dragées"),
    ColorRecord::from_static("1034A6", "Bleu", "Bleu égyptien"),
    ColorRecord::from_static("2C75FF", "Bleu", "Bleu électrique"),
    ColorRecord::from_static("56739A", "Bleu", "Bleu guède"),
    ColorRecord::from_static("7F8FA6", "Bleu", "Bleu horizon"),
    ColorRecord::from_static("6050DC", "Bleu", "Bleu majorelle"),
    ColorRecord::from_static("03224C", "Bleu", "Bleu marine"),
    ColorRecord::from_static("73C2FB", "Bleu", "Bleu maya"),
    ColorRecord::from_static("24445C", "Bleu", "Bleu minéral"),
    ColorRecord::from_static("0F056B", "Bleu", "Bleu nuit"),
    ColorRecord::from_static("1B019B", "Bleu", "Bleu outremer"),
    ColorRecord::from_static("2B009A", "Bleu", "Bleu outremer"),
    ColorRecord::from_static("067790", "Bleu", "Bleu paon"),
    ColorRecord::from_static("6600FF", "Bleu", "Bleu persan"),
    ColorRecord::from_static("1D4851", "Bleu", "Bleu pétrole"),
    ColorRecord::from_static("318CE7", "Bleu", "Bleu roi"),
    ColorRecord::from_static("0131B4", "Bleu", "Bleu saphir"),
    ColorRecord::from_static("008E8E", "Bleu", "Bleu sarcelle"),
    ColorRecord::from_static("003399", "Bleu", "Bleu smalt"),
    ColorRecord::from_static("0ABAB5", "Bleu", "Bleu tiffany"),
    ColorRecord::from_static("425B8A", "Bleu", "Bleu turquin"),
    ColorRecord::from_static("26C4EC", "Bleu", "Caeruléum"),
    ColorRecord::from_static("048B9A", "Bleu", "Canard"),
    ColorRecord::from_static("74D0F1", "Bleu", "Cérulé"),
    ColorRecord::from_static("00FFFF", "Bleu", "Cyan"),
    ColorRecord::from_static("2BFAFA", "Bleu", "Cyan"),
    ColorRecord::from_static("BBD2E1", "Bleu", "Fuméee"),
    ColorRecord::from_static("80D0D0", "Bleu", "Givré"),
    ColorRecord::from_static("791CF8", "Bleu", "Indigo"),
    ColorRecord::from_static("2E006C", "Bleu", "Indigo"),
    ColorRecord::from_static("4B0082", "Bleu", "Indigo du web"),
    ColorRecord::from_static("002FA7", "Bleu", "Klein"),
    ColorRecord::from_static("21177D", "Bleu", "Klein"),
    ColorRecord::from_static("26619C", "Bleu", "Lapislazuli"),
    ColorRecord::from_static("9683EC", "Bleu", "Lavande"),
    ColorRecord::from_static("56739A", "Bleu", "Pastel"),
    ColorRecord::from_static("CCCCFF", "Bleu", "Pervenche"),
    ColorRecord::from_static("25FDE9", "Bleu", "Turquoise"),
    ColorRecord::from_static("FFFF00", "Jaune", "Jaune"),
    ColorRecord::from_static("F0C300", "Jaune", "Ambre"),
    ColorRecord::from_static("FFCB60", "Jaune", "Aurore"),
    ColorRecord::from_static("F0E36B", "Jaune", "Beurre"),
    ColorRecord::from_static("FFF48D", "Jaune", "Beurre frais"),
    ColorRecord::from_static("E8D630", "Jaune", "Blé"),
    ColorRecord::from_static("E2BC74", "Jaune", "Blond"),
    ColorRecord::from_static("FCDC12", "Jaune", "Boutton d'or"),
    ColorRecord::from_static("EDD38C", "Jaune", "Bulle"),
    ColorRecord::from_static("CDCD0D", "Jaune", "Caca d'oie"),
    ColorRecord::from_static("D0C07A", "Jaune", "Chamois"),
    ColorRecord::from_static("FBF2B7", "Jaune", "Champagne"),
    ColorRecord::from_static("EDFF0C", "Jaune", "Chrome"),
    ColorRecord::from_static("FFFF05", "Jaune", "Chrome"),
    ColorRecord::from_static("F7FF3C", "Jaune", "Citron"),
    ColorRecord::from_static("AD4F09", "Jaune", "Fauve"),
    ColorRecord::from_static("E6E697", "Jaune", "Flave"),
    ColorRecord::from_static("FFFF6B", "Jaune", "Fleur de soufre"),
    ColorRecord::from_static("EF9B0F", "Jaune", "Gomme-gutte"),
    ColorRecord::from_static("EFD242", "Jaune", "Jaune auréolin"),
    ColorRecord::from_static("D1B606", "Jaune", "Jaune banane"),
    ColorRecord::from_static("E7F00D", "Jaune", "Jaune canari"),
    ColorRecord::from_static("DFFF00", "Jaune", "Jaune chartreuse"),
    ColorRecord::from_static("FDEE00", "Jaune", "Jaune de cobalt"),
    ColorRecord::from_static("FFF0BC", "Jaune", "Jaune de Naples"),
    ColorRecord::from_static("EFD807", "Jaune", "Jaune d'or"),
    ColorRecord::from_static("FFE436", "Jaune", "Jaune impérial"),
    ColorRecord::from_static("FEF86C", "Jaune", "Jaune mimosa"),
    ColorRecord::from_static("C7CF00", "Jaune", "Jaune moutarde"),
    ColorRecord::from_static("F7E269", "Jaune", "Jaune nankin"),
    ColorRecord::from_static("808000", "Jaune", "Jaune olive"),
    ColorRecord::from_static("FEE347", "Jaune", "Jaune paille"),
    ColorRecord::from_static("F7E35F", "Jaune", "Jaune poussin"),
    ColorRecord::from_static("FFDE75", "Jaune", "Maïs"),
    ColorRecord::from_static("EED153", "Jaune", "Mars"),
    ColorRecord::from_static("B3B191", "Jaune", "Mastic"),
    ColorRecord::from_static("DAB30A", "Jaune", "Miel"),
    ColorRecord::from_static("DFAF2C", "Jaune", "Ocre jaune"),
    ColorRecord::from_static("DD985C", "Jaune", "Ocre rouge"),
    ColorRecord::from_static("FFD700", "Jaune", "Or"),
    ColorRecord::from_static("FCD21C", "Jaune", "Orpiment"),
    ColorRecord::from_static("B67823", "Jaune", "Poil de chameau"),
    ColorRecord::from_static("C3B470", "Jaune", "Queue de vache"),
    ColorRecord::from_static("A89874", "Jaune", "Queue de vache"),
    ColorRecord::from_static("E0CDA9", "Jaune", "Sable"),
    ColorRecord::from_static("F3D617", "Jaune", "Safran"),
    ColorRecord::from_static("FFFF6B", "Jaune", "Soufre"),
    ColorRecord::from_static("FAEA73", "Jaune", "Topaze"),
    ColorRecord::from_static("E1CE9A", "Jaune", "Vanille"),
    ColorRecord::from_static("E7A854", "Jaune", "Vénitien"),
    ColorRecord::from_static("FF0000", "Rouge", "Rouge"),
    ColorRecord::from_static("91283B", "Rouge", "Amarante"),
    ColorRecord::from_static("6D071A", "Rouge", "Bordeaux"),
    ColorRecord::from_static("842E1B", "Rouge", "Brique"),
    ColorRecord::from_static("BB0B0B", "Rouge", "Cerise"),
    ColorRecord::from_static("E73E01", "Rouge", "Corail"),
    ColorRecord::from_static("ED0000", "Rouge", "Ecarlate"),
    ColorRecord::from_static("BF3030", "Rouge", "Fraise"),
    ColorRecord::from_static("A42424", "Rouge", "Fraise écrasée"),
    ColorRecord::from_static("C72C48", "Rouge", "Framboise"),
    ColorRecord::from_static("FD3F92", "Rouge", "Fushia"),
    ColorRecord::from_static("E9383F", "Rouge", "Grenadine"),
    ColorRecord::from_static("6E0B14", "Rouge", "Grenat"),
    ColorRecord::from_static("FE96A0", "Rouge", "Incarnadin"),
    ColorRecord::from_static("FF6F7D", "Rouge", "Incarnat"),
    ColorRecord::from_static("FF00FF", "Rouge", "Magenta"),
    ColorRecord::from_static("800080", "Rouge", "Magenta foncé"),
    ColorRecord::from_static("DB0073", "Rouge", "Magenta fushia"),
    ColorRecord::from_static("D473D4", "Rouge", "Mauve"),
    ColorRecord::from_static("FC5D5D", "Rouge", "Nacarat"),
    ColorRecord::from_static("DD985C", "Rouge", "Ocre rouge"),
    ColorRecord::from_static("91283B", "Rouge", "Passe-velours"),
    ColorRecord::from_static("9E0E40", "Rouge", "Pourpre"),
    ColorRecord::from_static("811453", "Rouge", "Prune"),
    ColorRecord::from_static("FF007F", "Rouge", "Rose vif"),
    ColorRecord::from_static("D90115", "Rouge", "Rouge alizarine"),
    ColorRecord::from_static("F7230C", "Rouge", "Rouge anglais"),
    ColorRecord::from_static("A5260A", "Rouge", "Rouge bismarck"),
    ColorRecord::from_static("6B0D0D", "Rouge", "Rouge bourgogne"),
    ColorRecord::from_static("FF5E4D", "Rouge", "Rouge capucine"),
    ColorRecord::from_static("B82010", "Rouge", "Rouge cardinal"),
    ColorRecord::from_static("960018", "Rouge", "Rouge carmin"),
    ColorRecord::from_static("DB1702", "Rouge", "Rouge cinabre"),
    ColorRecord::from_static("FD4626", "Rouge", "Rouge cinabre"),
    ColorRecord::from_static("C60800", "Rouge", "Rouge coquelicot"),
    ColorRecord::from_static("960018", "Rouge", "Rouge cramoisi"),
    ColorRecord::from_static("DC143C", "Rouge", "Rouge cramoisi"),
    ColorRecord::from_static("A91101", "Rouge", "Rouge Andrinople"),
    ColorRecord::from_static("EB0000", "Rouge", "Rouge d'aniline"),
    ColorRecord::from_static("801818", "Rouge", "Rouge de Falun"),
    ColorRecord::from_static("F7230C", "Rouge", "Rouge de mars"),
    ColorRecord::from_static("BC2001", "Rouge", "Rouge écrevisse"),
    ColorRecord::from_static("FE1B00", "Rouge", "Rouge feu"),
    ColorRecord::from_static("FF4901", "Rouge", "Rouge feu"),
    ColorRecord::from_static("EE1010", "Rouge", "Rouge garance"),
    ColorRecord::from_static("CF0A1D", "Rouge", "Rouge groseille"),
    ColorRecord::from_static("C60800", "Rouge", "Rouge ponceau"),
    ColorRecord::from_static("E0115F", "Rouge", "Rouge rubis"),
    ColorRecord::from_static("850606", "Rouge", "Rouge sang"),
    ColorRecord::from_static("DE2916", "Rouge", "Rouge tomate"),
    ColorRecord::from_static("AE4A34", "Rouge", "Rouge tomette"),
    ColorRecord::from_static("A91101", "Rouge", "Rouge turc"),
    ColorRecord::from_static("DB1702", "Rouge", "Rouge vermillon"),
    ColorRecord::from_static("FD4626", "Rouge", "Rouge vermillon"),
    ColorRecord::from_static("C71585", "Rouge", "Rouge-violet"),
    ColorRecord::from_static("985717", "Rouge", "Rouille"),
    ColorRecord::from_static("730800", "Rouge", "Sang de boeuf"),
    ColorRecord::from_static("8D4024", "Rouge", "Senois"),
    ColorRecord::from_static("CC4E5C", "Rouge", "Terracotta"),
    ColorRecord::from_static("FF0921", "Rouge", "Vermeil"),
    ColorRecord::from_static("6C0277", "Rouge", "Zizolin"),
    ColorRecord::from_static("606060", "Gris", "Gris"),
    ColorRecord::from_static("5A5E6B", "Gris", "Ardoise"),
    ColorRecord::from_static("CECECE", "Gris", "Argent"),
    ColorRecord::from_static("EFEFEF", "Gris", "Argile"),
    ColorRecord::from_static("766F64", "Gris", "Bis"),
    ColorRecord::from_static("3D2B1F", "Gris", "Bistre"),
    ColorRecord::from_static("856D4D", "Gris", "Bistre"),
    ColorRecord::from_static("4E3D28", "Gris", "Bitume"),
    ColorRecord::from_static("83A697", "Gris", "Céladon"),
    ColorRecord::from_static("806D5A", "Gris", "Châtaigne"),
    ColorRecord::from_static("BABABA", "Gris", "Etain oxydé"),
    ColorRecord::from_static("EDEDED", "Gris", "Etain pur"),
    ColorRecord::from_static("BBD2E1", "Gris", "Fuméee"),
    ColorRecord::from_static("BBAE98", "Gris", "Grège"),
    ColorRecord::from_static("AFAFAF", "Gris", "Gris acier"),
    ColorRecord::from_static("303030", "Gris", "Gris antharcite"),
    ColorRecord::from_static("677179", "Gris", "Gris de Payne"),
    ColorRecord::from_static("848484", "Gris", "Gris fer"),
    ColorRecord::from_static("7F7F7F", "Gris", "Gris fer"),
    ColorRecord::from_static("CECECE", "Gris", "Gris Perle"),
    ColorRecord::from_static("C7D0CC", "Gris", "Gris Perle"),
    ColorRecord::from_static("9E9E9E", "Gris", "Gris souris"),
    ColorRecord::from_static("BBACAC", "Gris", "Gris tourterelle"),
    ColorRecord::from_static("B3B191", "Gris", "Mastic"),
    ColorRecord::from_static("CCCCCC", "Gris", "Pinchard"),
    ColorRecord::from_static("798081", "Gris", "Plomb"),
    ColorRecord::from_static("997A8D", "Gris", "Rose de Mountbatten"),
    ColorRecord::from_static("463F32", "Gris", "Taupe"),
    ColorRecord::from_static("C1BFB1", "Gris", "Tourdile"),
    ColorRecord::from_static("000000", "Noir", "Noir"),
    ColorRecord::from_static("000000", "Noir", "Aile de corbeau"),
    ColorRecord::from_static("3F2204", "Noir", "Brou de noix"),
    ColorRecord::from_static("2C030B", "Noir", "Cassis"),
    ColorRecord::from_static("3A020D", "Noir", "Cassis"),
    ColorRecord::from_static("0B1616", "Noir", "Dorian"),
    ColorRecord::from_static("000000", "Noir", "Ebène"),
    ColorRecord::from_static("000000", "Noir", "Noir animal"),
    ColorRecord::from_static("000010", "Noir", "Noir charbon"),
    ColorRecord::from_static("120D16", "Noir", "Noir d'aniline"),
    ColorRecord::from_static("130E0A", "Noir", "Noir de carbone"),
    ColorRecord::from_static("130E0A", "Noir", "Noir de fumée"),
    ColorRecord::from_static("000000", "Noir", "Noir de jais"),
    ColorRecord::from_static("000000", "Noir", "Noir d'encre"),
    ColorRecord::from_static("000000", "Noir", "Noir d'ivoire"),
    ColorRecord::from_static("2F1E0E", "Noir", "Noiraud"),
    ColorRecord::from_static("2D241E", "Noir", "Réglisse"),
    ColorRecord::from_static("FFFFFF", "Blanc", "Blanc"),
    ColorRecord::from_static("FEFEFE", "Blanc", "Albâtre"),
    ColorRecord::from_static("EFEFEF", "Blanc", "Argile"),
    ColorRecord::from_static("F0FFFF", "Blanc", "Azur brume"),
    ColorRecord::from_static("F5F5DC", "Blanc", "Beige clair"),
    ColorRecord::from_static("FEFEE2", "Blanc", "Blanc cassé"),
    ColorRecord::from_static("FEFEFE", "Blanc", "Blanc céruse"),
    ColorRecord::from_static("FDF1B8", "Blanc", "Blanc crème"),
    ColorRecord::from_static("FEFEFE", "Blanc", "Blanc d'argent"),
    ColorRecord::from_static("FBFCFA", "Blanc", "Blanc de lait"),
    ColorRecord::from_static("FAF0E6", "Blanc", "Blanc de lin"),
    ColorRecord::from_static("FAF0C5", "Blanc", "Blanc de platine"),
    ColorRecord::from_static("FEFEFE", "Blanc", "Blanc de plomb"),
    ColorRecord::from_static("FEFEFE", "Blanc", "Blanc de saturne"),
    ColorRecord::from_static("FEFDF0", "Blanc", "Blanc de Troyes"),
    ColorRecord::from_static("F6FEFE", "Blanc", "Blanc de zinc"),
    ColorRecord::from_static("FEFDF0", "Blanc", "Blanc d'Espagne"),
    ColorRecord::from_static("FFFFD4", "Blanc", "Blanc d'ivoire"),
    ColorRecord::from_static("FEFEE0", "Blanc", "Blac écru"),
    ColorRecord::from_static("F4FEFE", "Blanc", "Blanc lunaire"),
    ColorRecord::from_static("FEFEFE", "Blanc", "Blanc neige"),
    ColorRecord::from_static("F2FFFF", "Blanc", "Blanc opalin"),
    ColorRecord::from_static("FEFEFE", "Blanc", "Blanc-bleu"),
    ColorRecord::from_static("FDE9E0", "Blanc", "Coquille d'oeuf"),
    ColorRecord::from_static("FEE7F0", "Blanc", "Cuisse de nymphe"),
];
