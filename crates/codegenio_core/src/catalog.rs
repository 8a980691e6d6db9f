//! crates/codegenio_core/src/catalog.rs
//!
//! The static domain catalog: curriculum levels and lessons, subscription
//! plans and the placement-test question bank. Read-only, built once on
//! first access.

use std::sync::OnceLock;

use crate::domain::{Lesson, Level, PlacementQuestion, SubscriptionPlan, SubscriptionTier};

pub const APP_NAME: &str = "CodeGenio";
pub const APP_SLOGAN: &str = "¡Aprende Programación Jugando!";

/// Curriculum title printed on the completion certificate.
pub const COURSE_TITLE: &str = "Introducción a la Programación";
pub const CERTIFICATE_ISSUER: &str = "El Equipo de CodeGenio";

pub const LEVEL_INICIAL: &str = "inicial";
pub const LEVEL_INTERMEDIO: &str = "intermedio";
pub const LEVEL_AVANZADO: &str = "avanzado";

/// The three curriculum levels with their lessons, in difficulty order.
pub fn levels() -> &'static [Level] {
    static LEVELS: OnceLock<Vec<Level>> = OnceLock::new();
    LEVELS.get_or_init(build_levels)
}

/// The pricing cards shown during registration.
pub fn subscription_plans() -> &'static [SubscriptionPlan] {
    static PLANS: OnceLock<Vec<SubscriptionPlan>> = OnceLock::new();
    PLANS.get_or_init(build_plans)
}

/// The fixed placement-test question bank.
pub fn placement_questions() -> &'static [PlacementQuestion] {
    static QUESTIONS: OnceLock<Vec<PlacementQuestion>> = OnceLock::new();
    QUESTIONS.get_or_init(build_placement_questions)
}

/// Looks up a level by id.
pub fn level(id: &str) -> Option<&'static Level> {
    levels().iter().find(|l| l.id == id)
}

/// Looks up a lesson inside a level.
pub fn lesson(level_id: &str, lesson_id: &str) -> Option<(&'static Level, &'static Lesson)> {
    let level = level(level_id)?;
    let lesson = level.lessons.iter().find(|l| l.id == lesson_id)?;
    Some((level, lesson))
}

/// The lesson following `lesson_id` within its level, if any.
pub fn next_lesson(level_id: &str, lesson_id: &str) -> Option<&'static Lesson> {
    let level = level(level_id)?;
    let index = level.lessons.iter().position(|l| l.id == lesson_id)?;
    level.lessons.get(index + 1)
}

/// Whether completing this lesson finishes the whole curriculum (and routes
/// the learner to the certificate).
pub fn is_final_lesson(level_id: &str, lesson_id: &str) -> bool {
    level_id == LEVEL_AVANZADO
        && level(LEVEL_AVANZADO)
            .and_then(|l| l.lessons.last())
            .is_some_and(|l| l.id == lesson_id)
}

fn lesson_entry(
    id: &str,
    title: &str,
    description: &str,
    content: &str,
    assistant_context: &str,
    estimated_time: &str,
) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        content: content.to_string(),
        assistant_context: assistant_context.to_string(),
        estimated_time: estimated_time.to_string(),
    }
}

fn build_levels() -> Vec<Level> {
    vec![
        Level {
            id: LEVEL_INICIAL.to_string(),
            title: "Nivel Inicial".to_string(),
            description: "Empieza tu aventura en el código. ¡Vamos a crear cosas increíbles juntos!"
                .to_string(),
            lessons: vec![
                lesson_entry(
                    "ini-1",
                    "Tu Primer \"Hola Mundo\"",
                    "Aprende a dar tu primer paso y hacer que la computadora te salude.",
                    r#"¡Bienvenido al mundo de la programación! Tu primera misión es hacer que la computadora diga "Hola, Mundo!". Es una tradición para todos los programadores.

Usaremos un comando especial llamado `mostrar()`. Todo lo que pongas dentro de los paréntesis y entre comillas, ¡aparecerá en la pantalla!

[CODE_START]
// Este es un comando para mostrar un mensaje
mostrar("¡Hola, Mundo!");
[CODE_END]

¡Felicidades! Acabas de escribir tu primera línea de código. Eres oficialmente un programador."#,
                    "Soy un niño aprendiendo a programar. Explícame qué es \"Hola, Mundo\" y por qué es importante.",
                    "10 min",
                ),
                lesson_entry(
                    "ini-2",
                    "Variables: Cajas Mágicas",
                    "Descubre cómo guardar información en \"cajas mágicas\" llamadas variables.",
                    r#"Imagina que tienes cajas mágicas para guardar tus juguetes. En programación, tenemos "variables", que son como cajas para guardar información.

Podemos crear una variable con un nombre y ponerle algo adentro. Por ejemplo, podemos guardar un número o un texto.

[CODE_START]
// Creamos una caja (variable) llamada "puntos" y guardamos el número 100
let puntos = 100;

// Creamos otra caja llamada "nombre" y guardamos el texto "Super Coder"
let nombre = "Super Coder";

// Ahora podemos ver qué hay dentro
mostrar(puntos);
mostrar(nombre);
[CODE_END]

¡Las variables son súper útiles para recordar cosas en nuestros programas!"#,
                    "Explícame qué es una variable como si fueran cajas mágicas para guardar cosas.",
                    "15 min",
                ),
                lesson_entry(
                    "ini-3",
                    "Algoritmos: Recetas para Robots",
                    "Aprende a dar instrucciones paso a paso, como si escribieras una receta.",
                    r#"Un algoritmo es como una receta de cocina, ¡pero para computadoras! Son una lista de pasos que le dices a la computadora que siga para hacer algo.

Por ejemplo, para hacer un sándwich, los pasos serían:
1. Tomar dos rebanadas de pan.
2. Poner jamón en una rebanada.
3. Poner queso sobre el jamón.
4. Juntar las dos rebanadas de pan.

En programación, escribimos algoritmos para resolver problemas. ¡Cada programa que usamos sigue un algoritmo!"#,
                    "¿Qué es un algoritmo? Explícamelo con una analogía divertida, como una receta de cocina.",
                    "15 min",
                ),
                lesson_entry(
                    "ini-4",
                    "Secuencias: El Orden Importa",
                    "Descubre por qué el orden de tus instrucciones es súper importante.",
                    r#"Las computadoras siguen tus instrucciones en el orden exacto en que las escribes. ¡Igual que cuando sigues los pasos para armar un juguete! Si cambias el orden, el resultado puede ser muy diferente.

[CODE_START]
// ¿Qué pasa si saludamos primero y luego preparamos el mensaje?
let mensaje = "¡Estoy listo para programar!";
mostrar("¡Hola!");
mostrar(mensaje);

// Ahora al revés
mostrar(mensaje); // ¡Oh, no! La variable "mensaje" no existe todavía aquí.
let mensaje = "¡Estoy listo para programar!";
[CODE_END]

El orden correcto es la clave para que tus programas funcionen como esperas. ¡Siempre de arriba hacia abajo!"#,
                    "¿Por qué es importante el orden del código? Usa una analogía como armar un LEGO.",
                    "10 min",
                ),
                lesson_entry(
                    "ini-5",
                    "Depuración: ¡A Cazar Bichos!",
                    "Aprende a encontrar y aplastar los \"bichos\" (errores) en tu código.",
                    r#"A veces, nuestro código no funciona. ¡No te preocupes! A estos errores los llamamos "bugs" o "bichos". Ser programador también significa ser un buen detective de bichos.

Un error común es escribir mal un comando o el nombre de una variable.

[CODE_START]
let nombreAmigo = "Alex";
// ¡Uy! Escribimos "n ombre" en lugar de "nombreAmigo"
mostrar(n ombre);
// La consola nos dirá que hay un error. ¡Tenemos que arreglarlo!

// Versión correcta:
mostrar(nombreAmigo);
[CODE_END]

Revisar tu código con atención es el superpoder para cazar y arreglar cualquier bicho."#,
                    "¿Qué es un \"bug\" o \"bicho\" en programación? ¿Cómo puedo encontrarlos?",
                    "15 min",
                ),
                lesson_entry(
                    "ini-6",
                    "Comentarios: Notas para Ti",
                    "Deja mensajes secretos en tu código que solo tú y otros programadores pueden leer.",
                    r#"Puedes escribir notas en tu código que la computadora ignorará por completo. ¡Son para los humanos! Se llaman "comentarios" y son muy útiles para recordar qué hace una parte de tu código o para dejar una idea.

Para escribir un comentario, usamos dos barras inclinadas `//`.

[CODE_START]
// Esta variable guarda la edad de mi mascota.
let edadMascota = 4;

// La siguiente línea mostrará un saludo
mostrar("¡Mi mascota es genial!"); // ¡Y tiene 4 años!
[CODE_END]

Usa comentarios para que tu código sea más fácil de entender. ¡Es como dejar pistas para tu yo del futuro!"#,
                    "Explícame para qué sirven los comentarios en el código.",
                    "10 min",
                ),
                lesson_entry(
                    "ini-7",
                    "Tu Primer Dibujo con Código",
                    "Usa el código para dibujar formas y figuras simples en la pantalla.",
                    r#"¡No todo es texto! También podemos usar código para crear arte. Imagina que tienes un lápiz mágico que obedece tus comandos. Podemos decirle que dibuje un círculo, un cuadrado o que cambie de color.

[CODE_START]
// Le decimos al lápiz que se ponga de color rojo
color("rojo");

// Dibujamos un círculo en una posición (x, y) con un tamaño
circulo(50, 50, 40);

// ¡Ahora un cuadrado azul!
color("azul");
cuadrado(100, 100, 60);
[CODE_END]

¡Experimenta con diferentes formas, colores y tamaños para crear tu propia obra de arte digital!"#,
                    "¿Cómo puedo dibujar con código? Dame ideas sencillas para empezar.",
                    "20 min",
                ),
            ],
        },
        Level {
            id: LEVEL_INTERMEDIO.to_string(),
            title: "Nivel Intermedio".to_string(),
            description:
                "Aprende nuevos trucos y hechizos para que tus programas sean más inteligentes."
                    .to_string(),
            lessons: vec![
                lesson_entry(
                    "int-1",
                    "Condicionales: Tomando Decisiones",
                    "Enseña a tu programa a decidir qué hacer con las sentencias if/else.",
                    r#"A veces, queremos que nuestro programa haga una cosa si algo es verdad, y otra cosa si es falso. ¡Para eso usamos los condicionales! Son como un "si pasa esto, haz aquello".

Usamos la palabra mágica `if` (que significa "si" en inglés). Si la condición dentro del `if` es verdadera, se ejecuta el código.

[CODE_START]
let edad = 10;

if (edad > 7) {
  mostrar("¡Puedes entrar al tobogán gigante!");
} else {
  mostrar("Aún necesitas crecer un poco más.");
}
[CODE_END]

El `else` (que significa "si no") nos da una acción alternativa. ¡Ahora tus programas pueden pensar!"#,
                    "Explícame qué es un condicional \"if/else\" con un ejemplo de un parque de diversiones.",
                    "20 min",
                ),
                lesson_entry(
                    "int-2",
                    "Bucles: Repitiendo Acciones",
                    "Aprende a hacer que la computadora repita tareas muchas veces con los bucles.",
                    r#"¿Te imaginas tener que escribir `mostrar("¡Hola!")` cien veces? ¡Sería muy aburrido! Para eso existen los bucles. Un bucle repite un bloque de código las veces que queramos.

Un bucle famoso es el bucle `for`. Le decimos desde dónde empezar a contar, hasta dónde llegar y de cuánto en cuánto avanzar.

[CODE_START]
// Este bucle contará del 1 al 5
for (let i = 1; i <= 5; i = i + 1) {
  mostrar("Número: " + i);
}
[CODE_END]

¡Los bucles nos ahorran muchísimo trabajo y hacen que la computadora trabaje por nosotros!"#,
                    "¿Qué es un bucle \"for\"? Explícame para qué sirve con un ejemplo fácil.",
                    "20 min",
                ),
                lesson_entry(
                    "int-3",
                    "Funciones: Hechizos de Código",
                    "Crea tus propios \"hechizos\" de código para usarlos cuando quieras.",
                    r#"Una función es como un hechizo mágico que creas y le pones un nombre. Cada vez que dices el nombre del hechizo (llamas a la función), ¡sucede la magia!

Esto es genial porque si tienes un conjunto de pasos que usas mucho, puedes guardarlos en una función y no tener que escribirlos una y otra vez.

[CODE_START]
// Creamos un hechizo (función) para saludar
function saludarAmigo(nombre) {
  mostrar("¡Hola, " + nombre + "! ¡Qué bueno verte!");
}

// Ahora usamos nuestro hechizo
saludarAmigo("Ana");
saludarAmigo("Luis");
[CODE_END]

¡Con las funciones, tu código será más ordenado y poderoso!"#,
                    "¿Qué es una función en programación? Explícamelo como si fueran hechizos mágicos.",
                    "25 min",
                ),
                lesson_entry(
                    "int-4",
                    "Bucles \"Mientras\": Repetir con Condición",
                    "Usa el bucle `while` para repetir algo mientras una condición sea verdadera.",
                    r#"Además del bucle `for`, existe otro tipo de bucle llamado `while` (mientras). Este bucle repetirá el código en su interior una y otra vez, ¡mientras una condición sea verdadera!

Es útil cuando no sabemos exactamente cuántas veces necesitamos repetir algo.

[CODE_START]
let energia = 5;

while (energia > 0) {
  mostrar("¡Aún tengo energía! Nivel: " + energia);
  energia = energia - 1; // ¡Importante! Debemos cambiar la condición para no crear un bucle infinito.
}

mostrar("¡Uf! Necesito recargar.");
[CODE_END]

¡Los bucles `while` son geniales para juegos y simulaciones!"#,
                    "¿Cuál es la diferencia entre un bucle `for` y un bucle `while`?",
                    "20 min",
                ),
                lesson_entry(
                    "int-5",
                    "Arrays: Listas de Amigos",
                    "Guarda listas de tus cosas favoritas, como amigos o sabores de helado.",
                    r#"Imagina un cofre del tesoro donde guardas todos tus juguetes favoritos. En programación, un "array" es como ese cofre. Es una lista donde puedes guardar muchos valores juntos.

Para crear un array, usamos corchetes `[]` y separamos los elementos con comas.

[CODE_START]
// Un array con nuestros postres favoritos
let postres = ["helado", "pastel", "galletas"];

// Podemos ver un elemento específico por su posición (empezamos a contar desde 0)
mostrar(postres[0]); // Muestra "helado"
mostrar(postres[2]); // Muestra "galletas"
[CODE_END]

Los arrays son perfectos para guardar listas de amigos, puntuaciones de juegos, ¡o lo que se te ocurra!"#,
                    "Explícame qué es un array como si fuera un cofre del tesoro o una colección.",
                    "20 min",
                ),
                lesson_entry(
                    "int-6",
                    "Anidación: Ideas Dentro de Ideas",
                    "Aprende a poner bucles dentro de condicionales (¡y viceversa!).",
                    r#"¡Ahora vamos a combinar nuestros poderes! Podemos poner un condicional `if` dentro de un bucle `for`, o un bucle dentro de otro bucle. A esto se le llama "anidar" y nos permite crear programas muy inteligentes.

[CODE_START]
// Vamos a contar hasta 10 y decir si cada número es par o impar
for (let i = 1; i <= 10; i = i + 1) {

  // Un `if` anidado dentro del `for`
  if (i % 2 === 0) { // El operador % nos da el resto de una división
    mostrar(i + " es un número par.");
  } else {
    mostrar(i + " es un número impar.");
  }
}
[CODE_END]

Anidar es como construir con bloques de LEGO: ¡puedes juntar las piezas de diferentes maneras para crear algo nuevo y genial!"#,
                    "¿Qué significa \"anidar\" código? Dame un ejemplo fácil de entender.",
                    "25 min",
                ),
                lesson_entry(
                    "int-7",
                    "Eventos: Magia al Hacer Clic",
                    "Haz que tus programas reaccionen cuando el usuario hace clic en un botón.",
                    r#"Los programas más divertidos son los que reaccionan a lo que hacemos. A estas acciones, como hacer clic con el ratón o pulsar una tecla, las llamamos "eventos".

Podemos "escuchar" un evento en un elemento, como un botón, y ejecutar una función cuando suceda.

[CODE_START]
// Imagina que tenemos un botón en la pantalla con el id="miBoton"
let miBoton = obtenerElemento("miBoton");

// Le decimos al botón que escuche el evento "clic"
miBoton.alHacerClic(function() {
  // Este código se ejecuta CADA VEZ que se hace clic en el botón
  mostrar("¡Auch! ¡Me has hecho clic!");
});
[CODE_END]

¡Con los eventos, puedes crear juegos interactivos, aplicaciones y mucho más!"#,
                    "¿Qué es un evento en programación? Explícamelo como si fuera un interruptor de luz.",
                    "25 min",
                ),
            ],
        },
        Level {
            id: LEVEL_AVANZADO.to_string(),
            title: "Nivel Avanzado".to_string(),
            description:
                "Conviértete en un maestro del código y crea proyectos aún más asombrosos."
                    .to_string(),
            lessons: vec![
                lesson_entry(
                    "ava-1",
                    "Objetos: Crea tus Personajes",
                    "Aprende a crear estructuras complejas, como personajes para un juego.",
                    r#"Si quisiéramos crear un personaje para un juego, necesitaríamos guardar varias cosas sobre él: su nombre, sus puntos de vida, si tiene una llave... Para eso usamos "objetos".

Un objeto agrupa varias variables (propiedades) en un solo lugar. Usamos llaves `{}` para crearlos.

[CODE_START]
// Un objeto que representa a nuestro héroe
let heroe = {
  nombre: "Capitán Valiente",
  vida: 100,
  tieneLlave: false
};

// Así vemos sus propiedades
mostrar(heroe.nombre);
mostrar("Vida: " + heroe.vida);
[CODE_END]

¡Con los objetos, puedes representar casi cualquier cosa del mundo real en tu código!"#,
                    "¿Qué es un objeto en programación? Explícamelo creando un personaje de un videojuego.",
                    "25 min",
                ),
                lesson_entry(
                    "ava-2",
                    "Métodos: ¡Dando Poder a tus Objetos!",
                    "Dale acciones y poderes a tus personajes con métodos.",
                    r#"Ahora que nuestro "Capitán Valiente" existe como un objeto, ¡démosle poderes! Un método es una función que vive dentro de un objeto. Es una acción que el objeto puede realizar.

Vamos a darle a nuestro héroe la habilidad de saludar.

[CODE_START]
let heroe = {
  nombre: "Capitán Valiente",
  vida: 100,
  tieneLlave: false,
  // ¡Aquí está nuestro método!
  saludar: function() {
    mostrar("¡Hola! Soy " + this.nombre + " y estoy listo para la aventura.");
  }
};

// Para usar su poder, llamamos al método así:
heroe.saludar();
[CODE_END]

La palabra `this` es especial: se refiere al propio objeto. ¡Así, el Capitán sabe cómo decir su propio nombre! Ahora puedes darle todo tipo de poderes a tus personajes."#,
                    "Explícame qué es un método en un objeto, como si fuera un poder especial de un personaje.",
                    "25 min",
                ),
                lesson_entry(
                    "ava-3",
                    "Manipulando Arrays",
                    "Aprende a añadir, quitar y cambiar elementos en tus listas de tesoros.",
                    r#"Tus listas (arrays) son dinámicas. ¡Puedes cambiarlas cuando quieras! Hay métodos especiales para añadir elementos al final, quitarlos o incluso añadirlos al principio.

[CODE_START]
let inventario = ["espada", "escudo"];

// Añadimos una poción al final
inventario.agregar("poción"); // Ahora es ["espada", "escudo", "poción"]
mostrar(inventario);

// Quitamos el último elemento
inventario.quitarUltimo(); // Ahora es ["espada", "escudo"]
mostrar(inventario);

// ¿Cuántos objetos tenemos?
mostrar("Tengo " + inventario.longitud + " objetos.");
[CODE_END]

Dominar estos métodos te da un control total sobre tus colecciones de datos."#,
                    "¿Cómo puedo añadir o quitar cosas de un array? ¿Qué es \"longitud\"?",
                    "25 min",
                ),
                lesson_entry(
                    "ava-4",
                    "El DOM: El Esqueleto de la Web",
                    "Descubre cómo el código puede ver y cambiar los elementos de una página web.",
                    r#"Cada página web es un documento. Tu código puede interactuar con este documento a través de algo llamado DOM (Document Object Model). ¡Piensa en el DOM como el esqueleto de la página!

Puedes usar JavaScript para seleccionar un elemento del esqueleto (como un título, un párrafo o una imagen) y cambiarlo.

[CODE_START]
// Imagina que hay un título en tu página con id="tituloPrincipal"
let miTitulo = obtenerElementoPorId("tituloPrincipal");

// ¡Vamos a cambiar su texto!
miTitulo.texto = "¡Página Mágica Creada con Código!";

// ¡Y su color!
miTitulo.estilo.color = "purple";
[CODE_END]

Manipular el DOM es la clave para crear páginas web dinámicas e interactivas. ¡Es como tener control total sobre lo que ve el usuario!"#,
                    "¿Qué es el DOM? Explícamelo como si fuera el esqueleto de una página web.",
                    "30 min",
                ),
                lesson_entry(
                    "ava-5",
                    "Proyecto: Tu Propia Calculadora",
                    "¡Junta todo lo que has aprendido para construir una calculadora que funciona!",
                    r#"¡Es hora de un gran proyecto! Vamos a usar HTML para crear los botones, CSS para que se vea bonita, y JavaScript (con todo lo que has aprendido) para que funcione.

Necesitarás:
- Variables para guardar los números y la operación.
- Funciones para sumar, restar, etc.
- Manipulación del DOM para mostrar el resultado en la pantalla.
- Eventos para que los botones reaccionen al hacer clic.

[CODE_START]
// Lógica simple para un botón de suma
function sumar() {
  let numero1 = obtenerValorDe("input1");
  let numero2 = obtenerValorDe("input2");
  let resultado = numero1 + numero2;
  mostrarResultadoEnPantalla(resultado);
}

// Asociar esta función al evento de clic del botón de suma
let botonSuma = obtenerElementoPorId("botonSumar");
botonSuma.alHacerClic(sumar);
[CODE_END]

Este es un desafío emocionante que pone a prueba tus habilidades. ¡Demuestra todo lo que sabes!"#,
                    "Quiero hacer una calculadora. ¿Qué pasos debo seguir? ¿Qué conceptos de programación necesito usar?",
                    "45 min",
                ),
                lesson_entry(
                    "ava-6",
                    "JSON: El Lenguaje de los Datos",
                    "Aprende sobre JSON, el formato que usan las computadoras para pasarse datos.",
                    r#"Cuando los programas se comunican por internet, necesitan un idioma en común para entenderse. JSON (JavaScript Object Notation) es ese idioma. ¡Se parece mucho a los objetos de JavaScript que ya conoces!

Es una forma de escribir datos de manera ordenada que tanto humanos como computadoras pueden leer fácilmente.

[CODE_START]
// Así se ve un objeto de personaje en formato JSON
{
  "nombre": "Astro-Gato",
  "planeta": "Miau-Prime",
  "vidasRestantes": 9,
  "poderes": ["rayo láser", "súper siesta"]
}
[CODE_END]

Verás JSON por todas partes cuando trabajes con APIs y datos de internet. ¡Es el lenguaje universal para la información en la web!"#,
                    "¿Qué es JSON? ¿Por qué se parece a los objetos de JavaScript?",
                    "20 min",
                ),
                lesson_entry(
                    "ava-7",
                    "APIs: Conectando con el Mundo",
                    "Aprende cómo los programas hablan entre sí para obtener información.",
                    r#"Una API (Interfaz de Programación de Aplicaciones) es como un mesero en un restaurante. Tú (tu programa) le pides algo al mesero (la API), él va a la cocina (otro servidor o servicio) y te trae lo que pediste (los datos).

Podemos usar APIs para obtener el clima, buscar gifs de gatos, conseguir datos de un juego, ¡y mucho más!

[CODE_START]
// Así se pediría un chiste aleatorio a una API de chistes
pedirDatos("https://api.dechistes.com/chiste-aleatorio")
  .luego(function(respuesta) {
    // La respuesta suele venir en formato JSON
    let chiste = respuesta.chiste;
    mostrar(chiste);
  });
[CODE_END]

Las APIs abren un universo de posibilidades, permitiendo que tu programa se conecte y use el poder de otros servicios en internet."#,
                    "¿Qué es una API? Explícamelo con la analogía de un restaurante.",
                    "30 min",
                ),
            ],
        },
    ]
}

fn build_plans() -> Vec<SubscriptionPlan> {
    vec![
        SubscriptionPlan {
            tier: SubscriptionTier::Individual,
            price: "$9.99/mes".to_string(),
            description: None,
            features: vec![
                "Acceso a todos los niveles y lecciones".to_string(),
                "Soporte por IA en lecciones".to_string(),
                "Seguimiento de progreso personal".to_string(),
                "Un perfil de estudiante".to_string(),
            ],
            cta: "Empezar ahora".to_string(),
            highlight: false,
        },
        SubscriptionPlan {
            tier: SubscriptionTier::Family,
            price: "$19.99/mes".to_string(),
            description: None,
            features: vec![
                "Acceso completo para hasta 5 perfiles".to_string(),
                "Todos los niveles y lecciones".to_string(),
                "Soporte de IA para cada perfil".to_string(),
                "Panel de control parental para seguir el progreso".to_string(),
            ],
            cta: "Elegir plan Familiar".to_string(),
            highlight: true,
        },
        SubscriptionPlan {
            tier: SubscriptionTier::Institution,
            price: "Personalizado".to_string(),
            description: Some(
                "Perfecto para colegios, academias de código y centros educativos que buscan llevar la programación a sus aulas."
                    .to_string(),
            ),
            features: vec![
                "Licencias para toda la clase o institución".to_string(),
                "Panel de control para educadores y administradores".to_string(),
                "Seguimiento detallado del progreso por estudiante y clase".to_string(),
                "Reportes de rendimiento avanzados y exportables".to_string(),
                "Materiales curriculares y guías para el profesor".to_string(),
                "Certificados personalizables con el logo de la institución".to_string(),
                "Soporte prioritario y gestor de cuenta dedicado".to_string(),
            ],
            cta: "Solicitar una Demo".to_string(),
            highlight: false,
        },
    ]
}

fn build_placement_questions() -> Vec<PlacementQuestion> {
    vec![
        PlacementQuestion {
            id: "q1".to_string(),
            prompt: "¿Qué usarías para guardar tu nombre en el código?".to_string(),
            options: vec![
                "Un número".to_string(),
                "Una variable".to_string(),
                "Un bucle".to_string(),
                "Un color".to_string(),
            ],
            correct_index: 1,
        },
        PlacementQuestion {
            id: "q2".to_string(),
            prompt: "Si quieres que la computadora haga algo 10 veces, ¿qué es lo mejor que puedes usar?"
                .to_string(),
            options: vec![
                "Una variable".to_string(),
                "Un condicional".to_string(),
                "Un bucle".to_string(),
                "Escribir el código 10 veces".to_string(),
            ],
            correct_index: 2,
        },
        PlacementQuestion {
            id: "q3".to_string(),
            prompt: "¿Para qué sirve una declaración `if`?".to_string(),
            options: vec![
                "Para repetir código.".to_string(),
                "Para guardar información.".to_string(),
                "Para tomar una decisión y hacer algo si una condición es verdadera.".to_string(),
                "Para dibujar en la pantalla.".to_string(),
            ],
            correct_index: 2,
        },
        PlacementQuestion {
            id: "q4".to_string(),
            prompt: "¿Qué es un algoritmo?".to_string(),
            options: vec![
                "Un personaje de un juego.".to_string(),
                "Un error en el código.".to_string(),
                "Una lista de pasos o instrucciones para resolver un problema.".to_string(),
                "El color de fondo de una página web.".to_string(),
            ],
            correct_index: 2,
        },
        PlacementQuestion {
            id: "q5".to_string(),
            prompt: "¿Qué resultado mostraría el código `mostrar(\"Hola, \" + \"Mundo\");`?"
                .to_string(),
            options: vec![
                "Hola, Mundo".to_string(),
                "Hola,Mundo".to_string(),
                "Hola, + Mundo".to_string(),
                "Error".to_string(),
            ],
            correct_index: 0,
        },
    ]
}
